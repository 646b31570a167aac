//! # CPU Configuration
//!
//! Construction-time settings for a [`Cpu`](crate::Cpu). Hosts usually build this from
//! command-line flags; it can also be read from JSON.
//!
//! ```
//! use emu6502::{CpuConfig, TimingMode};
//!
//! let config: CpuConfig = serde_json::from_str(
//!     r#"{ "load_address": 1024, "entry_point": 1024, "timing": "strict" }"#,
//! ).unwrap();
//!
//! assert_eq!(config.load_address, 0x0400);
//! assert_eq!(config.entry_point, Some(0x0400));
//! assert_eq!(config.stack_pointer, None);
//! assert_eq!(config.timing, TimingMode::Strict);
//! ```

use serde::{Deserialize, Serialize};

/// Cycle accounting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingMode {
    /// Base cost from the opcode table, plus one cycle for a taken branch.
    #[default]
    Base,
    /// Base timing plus page-crossing penalties for indexed reads and taken branches.
    Strict,
}

/// Settings applied when a CPU is built from a ROM image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// Address the first image byte is copied to.
    pub load_address: u16,

    /// Entry point written into the reset vector. `None` or `Some(0)` keeps the vector
    /// already present in the image.
    pub entry_point: Option<u16>,

    /// Initial stack pointer. The register is not self-initializing, so `None` leaves it
    /// at 0x00 for ROM startup code to set.
    pub stack_pointer: Option<u8>,

    pub timing: TimingMode,
}

impl CpuConfig {
    /// Entry point to install, if any. Zero means "use the image's own vector".
    pub fn effective_entry_point(&self) -> Option<u16> {
        self.entry_point.filter(|&entry| entry != 0)
    }
}
