//! # 6502 Interpreter Core
//!
//! An instruction-level interpreter for the documented NMOS 6502 instruction set.
//!
//! The crate owns a flat 64KB memory image, the register file, a table-driven decoder
//! covering all 151 documented opcodes, and per-instruction cycle accounting.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::Cpu;
//!
//! // LDA #$01 ; ADC #$01 ; STA $0200
//! let program = [0xA9, 0x01, 0x69, 0x01, 0x8D, 0x00, 0x02];
//!
//! // Load at 0x0600 and point the reset vector there
//! let mut cpu = Cpu::with_entry_point(&program, 0x0600, 0x0600).unwrap();
//! cpu.set_sp(0xFF);
//! cpu.initialize();
//!
//! for _ in 0..3 {
//!     cpu.step().unwrap();
//! }
//!
//! assert_eq!(cpu.memory().read(0x0200), 0x02);
//! assert_eq!(cpu.cycles(), 2 + 2 + 4);
//! ```
//!
//! ## Architecture
//!
//! - **Single owner**: [`Cpu`] holds all registers, flags and memory; every instruction
//!   handler takes `&mut Cpu`
//! - **Table-driven decode**: [`OPCODE_TABLE`] maps each opcode byte to its mnemonic,
//!   addressing mode, base cycle cost and handler
//! - **Typed failures**: decoding or dispatch problems surface as [`ExecutionError`]
//!   values, never panics
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the execute loop
//! - `memory` - 64KB address space
//! - `status` - packed status register
//! - `addressing` - addressing modes and effective-address resolution
//! - `opcodes` - opcode metadata table
//! - `config` - construction settings and timing policy
//! - `disassembler` - turns machine code back into assembly text

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::{CpuConfig, TimingMode};
pub use cpu::{Cpu, CpuSnapshot, RunOutcome};
pub use disassembler::{disassemble, Instruction};
pub use memory::Memory;
pub use opcodes::{Mnemonic, Opcode, OPCODE_TABLE};
pub use status::{Flag, Status};

/// Errors that can occur while building or running a CPU.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// `step` was called before `initialize` loaded the reset vector.
    #[error("CPU stepped before initialize()")]
    NotInitialized,

    /// The fetched byte has no entry in the opcode table.
    #[error("opcode {opcode:#04X} at {pc:#06X} is not implemented")]
    UnimplementedOpcode { opcode: u8, pc: u16 },

    /// An instruction handler was dispatched with a mode it cannot use.
    #[error("{mnemonic} does not support {mode:?} addressing")]
    InvalidAddressingMode {
        mnemonic: Mnemonic,
        mode: AddressingMode,
    },

    /// A flag was assigned something other than 0 or 1.
    #[error("value {value} out of range for flag {flag:?}")]
    FlagValueOutOfRange { flag: Flag, value: u8 },

    /// The ROM image does not fit between the load address and 0xFFFF.
    #[error("{len}-byte image does not fit at {load_address:#06X}")]
    ImageTooLarge { len: usize, load_address: u16 },
}
