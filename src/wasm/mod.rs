//! WebAssembly bindings for the emulator.
//!
//! This module provides JavaScript-callable interfaces to the 6502 interpreter so a
//! browser front-end can load a ROM, step it and inspect state.

pub mod api;

pub use api::Emulator6502;
