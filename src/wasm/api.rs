//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection and
//! disassembly.

use wasm_bindgen::prelude::*;

use crate::disassembler::{decoder, formatter, Instruction};
use crate::{Cpu, ExecutionError};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// One line of a disassembly listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Assembly text, e.g. `LDA #$01`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: Cpu,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with `rom` loaded at `load_address`.
    ///
    /// A non-zero `entry_point` is written into the reset vector. The stack pointer
    /// starts at 0xFF so programs without startup code can use the stack.
    #[wasm_bindgen(constructor)]
    pub fn new(rom: &[u8], load_address: u16, entry_point: u16) -> Result<Emulator6502, JsError> {
        let mut cpu = Cpu::with_entry_point(rom, load_address, entry_point)?;
        cpu.set_sp(0xFF);
        Ok(Emulator6502 { cpu })
    }

    /// Load PC from the reset vector
    pub fn initialize(&mut self) {
        self.cpu.initialize();
    }

    /// Execute a single instruction and return its cycle cost
    pub fn step(&mut self) -> Result<u8, JsError> {
        Ok(self.cpu.step()?)
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        let consumed = self.cpu.run_for_cycles(u64::from(cycles))?;
        Ok(u32::try_from(consumed).unwrap_or(u32::MAX))
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn last_cycles(&self) -> u8 {
        self.cpu.last_cycles()
    }

    #[wasm_bindgen(getter)]
    pub fn current_opcode(&self) -> u8 {
        self.cpu.current_opcode()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Register dump in the same one-line form the trace log uses
    pub fn state(&self) -> String {
        self.cpu.snapshot().to_string()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read `len` bytes starting at `addr`, wrapping at the top of memory
    pub fn read_memory(&self, addr: u16, len: u32) -> Vec<u8> {
        (0..len)
            .map(|i| self.cpu.memory().read(addr.wrapping_add(i as u16)))
            .collect()
    }

    /// Write `bytes` starting at `addr`, wrapping at the top of memory
    pub fn write_memory(&mut self, addr: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.cpu.memory_mut().write(addr.wrapping_add(i as u16), byte);
        }
    }

    /// Disassemble `count` instructions starting at an address
    pub fn disassemble(&self, start_addr: u16, count: u32) -> Vec<JsValue> {
        let mut lines = Vec::with_capacity(count as usize);
        let mut addr = start_addr;

        for _ in 0..count {
            let window = self.read_memory(addr, 3);
            let instr = decoder::decode_instruction(&window, addr)
                .unwrap_or_else(|| Instruction::data_byte(addr, window[0]));

            let bytes = window[..instr.size_bytes as usize].to_vec();
            lines.push(JsValue::from(DisassemblyLine {
                address: addr,
                bytes,
                text: formatter::format_instruction(&instr),
            }));
            addr = addr.wrapping_add(instr.size_bytes as u16);
        }

        lines
    }
}
