//! Opcode table validation tests
//!
//! Verifies that the opcode metadata table covers exactly the documented instruction set
//! with the published cycle counts.

use std::collections::HashMap;

use emu6502::{AddressingMode, Cpu, ExecutionError, Mnemonic, OPCODE_TABLE};

#[test]
fn test_documented_opcode_count() {
    let defined = OPCODE_TABLE.iter().filter(|entry| entry.is_some()).count();
    assert_eq!(defined, 151);
}

#[test]
fn test_opcodes_per_mnemonic() {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in OPCODE_TABLE.iter().flatten() {
        *counts.entry(entry.mnemonic.as_str()).or_default() += 1;
    }

    let expected = [
        ("ADC", 8), ("AND", 8), ("ASL", 5), ("BIT", 2), ("CMP", 8), ("CPX", 3),
        ("CPY", 3), ("DEC", 4), ("EOR", 8), ("INC", 4), ("JMP", 2), ("LDA", 8),
        ("LDX", 5), ("LDY", 5), ("LSR", 5), ("ORA", 8), ("ROL", 5), ("ROR", 5),
        ("SBC", 8), ("STA", 7), ("STX", 3), ("STY", 3),
    ];
    for (mnemonic, count) in expected {
        assert_eq!(counts.get(mnemonic), Some(&count), "{}", mnemonic);
    }
    assert_eq!(counts.len(), 56);
}

#[test]
fn test_size_matches_addressing_mode() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        if let Some(entry) = entry {
            let size = entry.size_bytes();
            assert!((1..=3).contains(&size), "opcode {:02X}", opcode);
            assert_eq!(size, 1 + entry.addressing_mode.operand_bytes());
        }
    }
}

/// Published NMOS 6502 reference: opcode, mnemonic, addressing mode, base cycles.
#[rustfmt::skip]
const REFERENCE: [(u8, Mnemonic, AddressingMode, u8); 151] = {
    use AddressingMode::*;
    use Mnemonic::*;
    [
        (0x69, Adc, Immediate, 2), (0x65, Adc, ZeroPage, 3), (0x75, Adc, ZeroPageX, 4),
        (0x6D, Adc, Absolute, 4), (0x7D, Adc, AbsoluteX, 4), (0x79, Adc, AbsoluteY, 4),
        (0x61, Adc, IndirectX, 6), (0x71, Adc, IndirectY, 5),
        (0x29, And, Immediate, 2), (0x25, And, ZeroPage, 3), (0x35, And, ZeroPageX, 4),
        (0x2D, And, Absolute, 4), (0x3D, And, AbsoluteX, 4), (0x39, And, AbsoluteY, 4),
        (0x21, And, IndirectX, 6), (0x31, And, IndirectY, 5),
        (0x0A, Asl, Accumulator, 2), (0x06, Asl, ZeroPage, 5), (0x16, Asl, ZeroPageX, 6),
        (0x0E, Asl, Absolute, 6), (0x1E, Asl, AbsoluteX, 7),
        (0x90, Bcc, Relative, 2), (0xB0, Bcs, Relative, 2), (0xF0, Beq, Relative, 2),
        (0x30, Bmi, Relative, 2), (0xD0, Bne, Relative, 2), (0x10, Bpl, Relative, 2),
        (0x50, Bvc, Relative, 2), (0x70, Bvs, Relative, 2),
        (0x24, Bit, ZeroPage, 3), (0x2C, Bit, Absolute, 4),
        (0x00, Brk, Implied, 7),
        (0x18, Clc, Implied, 2), (0xD8, Cld, Implied, 2), (0x58, Cli, Implied, 2),
        (0xB8, Clv, Implied, 2),
        (0xC9, Cmp, Immediate, 2), (0xC5, Cmp, ZeroPage, 3), (0xD5, Cmp, ZeroPageX, 4),
        (0xCD, Cmp, Absolute, 4), (0xDD, Cmp, AbsoluteX, 4), (0xD9, Cmp, AbsoluteY, 4),
        (0xC1, Cmp, IndirectX, 6), (0xD1, Cmp, IndirectY, 5),
        (0xE0, Cpx, Immediate, 2), (0xE4, Cpx, ZeroPage, 3), (0xEC, Cpx, Absolute, 4),
        (0xC0, Cpy, Immediate, 2), (0xC4, Cpy, ZeroPage, 3), (0xCC, Cpy, Absolute, 4),
        (0xC6, Dec, ZeroPage, 5), (0xD6, Dec, ZeroPageX, 6), (0xCE, Dec, Absolute, 6),
        (0xDE, Dec, AbsoluteX, 7),
        (0xCA, Dex, Implied, 2), (0x88, Dey, Implied, 2),
        (0x49, Eor, Immediate, 2), (0x45, Eor, ZeroPage, 3), (0x55, Eor, ZeroPageX, 4),
        (0x4D, Eor, Absolute, 4), (0x5D, Eor, AbsoluteX, 4), (0x59, Eor, AbsoluteY, 4),
        (0x41, Eor, IndirectX, 6), (0x51, Eor, IndirectY, 5),
        (0xE6, Inc, ZeroPage, 5), (0xF6, Inc, ZeroPageX, 6), (0xEE, Inc, Absolute, 6),
        (0xFE, Inc, AbsoluteX, 7),
        (0xE8, Inx, Implied, 2), (0xC8, Iny, Implied, 2),
        (0x4C, Jmp, Absolute, 3), (0x6C, Jmp, Indirect, 5),
        (0x20, Jsr, Absolute, 6),
        (0xA9, Lda, Immediate, 2), (0xA5, Lda, ZeroPage, 3), (0xB5, Lda, ZeroPageX, 4),
        (0xAD, Lda, Absolute, 4), (0xBD, Lda, AbsoluteX, 4), (0xB9, Lda, AbsoluteY, 4),
        (0xA1, Lda, IndirectX, 6), (0xB1, Lda, IndirectY, 5),
        (0xA2, Ldx, Immediate, 2), (0xA6, Ldx, ZeroPage, 3), (0xB6, Ldx, ZeroPageY, 4),
        (0xAE, Ldx, Absolute, 4), (0xBE, Ldx, AbsoluteY, 4),
        (0xA0, Ldy, Immediate, 2), (0xA4, Ldy, ZeroPage, 3), (0xB4, Ldy, ZeroPageX, 4),
        (0xAC, Ldy, Absolute, 4), (0xBC, Ldy, AbsoluteX, 4),
        (0x4A, Lsr, Accumulator, 2), (0x46, Lsr, ZeroPage, 5), (0x56, Lsr, ZeroPageX, 6),
        (0x4E, Lsr, Absolute, 6), (0x5E, Lsr, AbsoluteX, 7),
        (0xEA, Nop, Implied, 2),
        (0x09, Ora, Immediate, 2), (0x05, Ora, ZeroPage, 3), (0x15, Ora, ZeroPageX, 4),
        (0x0D, Ora, Absolute, 4), (0x1D, Ora, AbsoluteX, 4), (0x19, Ora, AbsoluteY, 4),
        (0x01, Ora, IndirectX, 6), (0x11, Ora, IndirectY, 5),
        (0x48, Pha, Implied, 3), (0x08, Php, Implied, 3), (0x68, Pla, Implied, 4),
        (0x28, Plp, Implied, 4),
        (0x2A, Rol, Accumulator, 2), (0x26, Rol, ZeroPage, 5), (0x36, Rol, ZeroPageX, 6),
        (0x2E, Rol, Absolute, 6), (0x3E, Rol, AbsoluteX, 7),
        (0x6A, Ror, Accumulator, 2), (0x66, Ror, ZeroPage, 5), (0x76, Ror, ZeroPageX, 6),
        (0x6E, Ror, Absolute, 6), (0x7E, Ror, AbsoluteX, 7),
        (0x40, Rti, Implied, 6), (0x60, Rts, Implied, 6),
        (0xE9, Sbc, Immediate, 2), (0xE5, Sbc, ZeroPage, 3), (0xF5, Sbc, ZeroPageX, 4),
        (0xED, Sbc, Absolute, 4), (0xFD, Sbc, AbsoluteX, 4), (0xF9, Sbc, AbsoluteY, 4),
        (0xE1, Sbc, IndirectX, 6), (0xF1, Sbc, IndirectY, 5),
        (0x38, Sec, Implied, 2), (0xF8, Sed, Implied, 2), (0x78, Sei, Implied, 2),
        (0x85, Sta, ZeroPage, 3), (0x95, Sta, ZeroPageX, 4), (0x8D, Sta, Absolute, 4),
        (0x9D, Sta, AbsoluteX, 5), (0x99, Sta, AbsoluteY, 5), (0x81, Sta, IndirectX, 6),
        (0x91, Sta, IndirectY, 6),
        (0x86, Stx, ZeroPage, 3), (0x96, Stx, ZeroPageY, 4), (0x8E, Stx, Absolute, 4),
        (0x84, Sty, ZeroPage, 3), (0x94, Sty, ZeroPageX, 4), (0x8C, Sty, Absolute, 4),
        (0xAA, Tax, Implied, 2), (0xA8, Tay, Implied, 2), (0xBA, Tsx, Implied, 2),
        (0x8A, Txa, Implied, 2), (0x9A, Txs, Implied, 2), (0x98, Tya, Implied, 2),
    ]
};

#[test]
fn test_reference_cycle_counts() {
    for (opcode, mnemonic, mode, cycles) in REFERENCE {
        let entry = OPCODE_TABLE[opcode as usize]
            .as_ref()
            .unwrap_or_else(|| panic!("opcode {:02X} missing", opcode));
        assert_eq!(entry.mnemonic, mnemonic, "opcode {:02X}", opcode);
        assert_eq!(entry.addressing_mode, mode, "opcode {:02X}", opcode);
        assert_eq!(entry.base_cycles, cycles, "opcode {:02X}", opcode);
    }
}

#[test]
fn test_reference_covers_whole_table() {
    let mut listed = [false; 256];
    for (opcode, ..) in REFERENCE {
        assert!(!listed[opcode as usize], "opcode {:02X} listed twice", opcode);
        listed[opcode as usize] = true;
    }
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(entry.is_some(), listed[opcode], "opcode {:02X}", opcode);
    }
}

#[test]
fn test_undocumented_opcodes_absent() {
    for opcode in [0x02u8, 0x03, 0x1A, 0x80, 0x89, 0xAB, 0xCB, 0xEB, 0xFF] {
        assert!(OPCODE_TABLE[opcode as usize].is_none(), "{:02X}", opcode);
    }
}

#[test]
fn test_every_undefined_opcode_is_reported() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        if entry.is_some() {
            continue;
        }
        let mut cpu = Cpu::with_entry_point(&[opcode as u8], 0x8000, 0x8000).unwrap();
        cpu.initialize();
        assert_eq!(
            cpu.step(),
            Err(ExecutionError::UnimplementedOpcode {
                opcode: opcode as u8,
                pc: 0x8000
            })
        );
        assert_eq!(cpu.pc(), 0x8000);
    }
}

#[test]
fn test_every_defined_opcode_executes() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        let Some(entry) = entry else { continue };
        let mut cpu = Cpu::with_entry_point(&[opcode as u8, 0x10, 0x20], 0x8000, 0x8000).unwrap();
        cpu.set_sp(0xFF);
        cpu.initialize();

        let cycles = cpu
            .step()
            .unwrap_or_else(|e| panic!("opcode {:02X} failed: {}", opcode, e));
        assert!(
            cycles == entry.base_cycles || cycles == entry.base_cycles + 1,
            "opcode {:02X} took {} cycles",
            opcode,
            cycles
        );
        assert_eq!(cpu.current_opcode(), opcode as u8);
    }
}
