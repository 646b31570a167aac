//! 6502 Disassembler Module
//!
//! Converts machine code back into assembly text. Used for execution traces and by
//! debugger front-ends.

pub mod decoder;
pub mod formatter;

pub use decoder::decode_instruction;

use crate::addressing::AddressingMode;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP"), or ".byte" for undefined opcodes
    pub mnemonic: &'static str,

    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding branch and page-crossing penalties)
    pub base_cycles: u8,
}

impl Instruction {
    /// Placeholder for a byte with no opcode table entry.
    pub fn data_byte(address: u16, byte: u8) -> Self {
        Self {
            address,
            opcode: byte,
            mnemonic: ".byte",
            addressing_mode: AddressingMode::Implied,
            operand_bytes: vec![byte],
            size_bytes: 1,
            base_cycles: 0,
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// # Arguments
///
/// * `bytes` - The machine code to disassemble
/// * `start_address` - Address of `bytes[0]`, used for display and branch targets
///
/// Undefined opcodes, and a trailing instruction cut short by the end of the slice,
/// become one-byte `.byte` entries.
///
/// # Examples
///
/// ```
/// use emu6502::disassembler::{disassemble, formatter::format_instruction};
///
/// let listing: Vec<String> = disassemble(&[0xA9, 0x01, 0xD0, 0xFC, 0x02], 0x0600)
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(listing, ["LDA #$01", "BNE $0600", ".byte $02"]);
/// ```
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[offset..], address)
            .unwrap_or_else(|| Instruction::data_byte(address, bytes[offset]));
        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}
