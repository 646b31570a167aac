//! Tests for ASL, LSR, ROL and ROR in accumulator and memory forms.

use emu6502::{Cpu, Flag};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu {
    let mut cpu = Cpu::with_entry_point(&[], 0x8000, 0x8000).unwrap();
    cpu.set_sp(0xFF);
    cpu.initialize();
    cpu
}

fn run_accumulator(opcode: u8, a: u8, carry: bool) -> Cpu {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    cpu.set_a(a);
    cpu.set_flag(Flag::Carry, carry);
    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.pc(), 0x8001);
    cpu
}

// ========== ASL ==========

#[test]
fn test_asl_accumulator() {
    let cpu = run_accumulator(0x0A, 0x41, false);
    assert_eq!(cpu.a(), 0x82);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_asl_bit_7_into_carry() {
    let cpu = run_accumulator(0x0A, 0x80, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_asl_zero_page_read_modify_write() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x06);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0020, 0x03);
    cpu.set_a(0xAA);

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.memory().read(0x0020), 0x06);
    assert_eq!(cpu.a(), 0xAA);
}

#[test]
fn test_asl_absolute_x_costs_seven() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x1E);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2100, 0x01);
    cpu.set_x(0x01);

    assert_eq!(cpu.step().unwrap(), 7);
    assert_eq!(cpu.memory().read(0x2100), 0x02);
}

// ========== LSR ==========

#[test]
fn test_lsr_accumulator_bit_0_into_carry() {
    let cpu = run_accumulator(0x4A, 0x03, false);
    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_clears_negative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x4A);
    cpu.set_a(0xFE);
    cpu.set_flag(Flag::Negative, true);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x7F);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_lsr_to_zero() {
    let cpu = run_accumulator(0x4A, 0x01, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_lsr_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x4E);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x30);
    cpu.memory_mut().write(0x3000, 0x80);

    assert_eq!(cpu.step().unwrap(), 6);
    assert_eq!(cpu.memory().read(0x3000), 0x40);
}

// ========== ROL ==========

#[test]
fn test_rol_carry_in_and_out() {
    let cpu = run_accumulator(0x2A, 0x80, true);
    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_rol_without_carry() {
    let cpu = run_accumulator(0x2A, 0x40, false);
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_rol_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x36);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0011, 0x81);
    cpu.set_x(0x01);

    assert_eq!(cpu.step().unwrap(), 6);
    assert_eq!(cpu.memory().read(0x0011), 0x02);
    assert!(cpu.flag_c());
}

// ========== ROR ==========

#[test]
fn test_ror_carry_into_bit_7() {
    let cpu = run_accumulator(0x6A, 0x02, true);
    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_bit_0_into_carry() {
    let cpu = run_accumulator(0x6A, 0x01, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_ror_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x66);
    cpu.memory_mut().write(0x8001, 0x44);
    cpu.memory_mut().write(0x0044, 0x10);

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.memory().read(0x0044), 0x08);
}
