//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format an instruction as a listing line: address, raw bytes, then assembly text.
///
/// ```
/// use emu6502::disassembler::{decoder::decode_instruction, formatter::format_listing_line};
///
/// let instr = decode_instruction(&[0x8D, 0x00, 0x02], 0x0600).unwrap();
/// assert_eq!(format_listing_line(&instr), "0600  8D 00 02  STA $0200");
/// ```
pub fn format_listing_line(instr: &Instruction) -> String {
    let mut hex = format!("{:02X}", instr.opcode);
    if instr.mnemonic != ".byte" {
        for byte in &instr.operand_bytes {
            hex.push_str(&format!(" {:02X}", byte));
        }
    }
    format!("{:04X}  {:<8}  {}", instr.address, hex, format_instruction(instr))
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    // Undefined opcodes carry their own byte as the operand
    if instr.mnemonic == ".byte" {
        return format!("${:02X}", instr.opcode);
    }

    let byte = || instr.operand_bytes.first().copied();
    let word = || match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    };

    match instr.addressing_mode {
        Implied => String::new(),
        Accumulator => "A".to_string(),
        Immediate => byte().map_or("#$??".into(), |b| format!("#${:02X}", b)),
        ZeroPage => byte().map_or("$??".into(), |b| format!("${:02X}", b)),
        ZeroPageX => byte().map_or("$??,X".into(), |b| format!("${:02X},X", b)),
        ZeroPageY => byte().map_or("$??,Y".into(), |b| format!("${:02X},Y", b)),
        Relative => byte().map_or("$????".into(), |b| {
            // Target is relative to the byte after the 2-byte branch
            let target = instr.address.wrapping_add(2).wrapping_add_signed(b as i8 as i16);
            format!("${:04X}", target)
        }),
        Absolute => word().map_or("$????".into(), |w| format!("${:04X}", w)),
        AbsoluteX => word().map_or("$????,X".into(), |w| format!("${:04X},X", w)),
        AbsoluteY => word().map_or("$????,Y".into(), |w| format!("${:04X},Y", w)),
        Indirect => word().map_or("($????)".into(), |w| format!("(${:04X})", w)),
        IndirectX => byte().map_or("($??,X)".into(), |b| format!("(${:02X},X)", b)),
        IndirectY => byte().map_or("($??),Y".into(), |b| format!("(${:02X}),Y", b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instr(opcode: u8, mnemonic: &'static str, mode: AddressingMode, operand: &[u8]) -> Instruction {
        Instruction {
            address: 0x8000,
            opcode,
            mnemonic,
            addressing_mode: mode,
            operand_bytes: operand.to_vec(),
            size_bytes: 1 + operand.len() as u8,
            base_cycles: 2,
        }
    }

    #[test]
    fn test_format_immediate() {
        let i = instr(0xA9, "LDA", AddressingMode::Immediate, &[0x42]);
        assert_eq!(format_instruction(&i), "LDA #$42");
    }

    #[test]
    fn test_format_absolute() {
        let i = instr(0x8D, "STA", AddressingMode::Absolute, &[0x00, 0x80]);
        assert_eq!(format_instruction(&i), "STA $8000");
    }

    #[test]
    fn test_format_implied_and_accumulator() {
        assert_eq!(format_instruction(&instr(0xEA, "NOP", AddressingMode::Implied, &[])), "NOP");
        assert_eq!(
            format_instruction(&instr(0x0A, "ASL", AddressingMode::Accumulator, &[])),
            "ASL A"
        );
    }

    #[test]
    fn test_format_indirect_modes() {
        assert_eq!(
            format_instruction(&instr(0x6C, "JMP", AddressingMode::Indirect, &[0x34, 0x12])),
            "JMP ($1234)"
        );
        assert_eq!(
            format_instruction(&instr(0xA1, "LDA", AddressingMode::IndirectX, &[0x10])),
            "LDA ($10,X)"
        );
        assert_eq!(
            format_instruction(&instr(0xB1, "LDA", AddressingMode::IndirectY, &[0x10])),
            "LDA ($10),Y"
        );
    }

    #[test]
    fn test_format_branch_backwards() {
        let i = instr(0xD0, "BNE", AddressingMode::Relative, &[0xFE]);
        assert_eq!(format_instruction(&i), "BNE $8000");
    }

    #[test]
    fn test_format_illegal_opcode() {
        let i = Instruction::data_byte(0x2000, 0xFF);
        assert_eq!(format_instruction(&i), ".byte $FF");
        assert_eq!(format_listing_line(&i), "2000  FF        .byte $FF");
    }
}
