//! Instruction decoder for the 6502 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::lookup;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// Some(Instruction) for a documented opcode with all operand bytes present, None
/// otherwise
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let entry = lookup(opcode)?;

    let operand_len = entry.addressing_mode.operand_bytes() as usize;
    let operand_bytes = rest.get(..operand_len)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: entry.mnemonic.as_str(),
        addressing_mode: entry.addressing_mode,
        operand_bytes,
        size_bytes: entry.size_bytes(),
        base_cycles: entry.base_cycles,
    })
}
