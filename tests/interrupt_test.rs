//! Tests for BRK and RTI.

use emu6502::Cpu;

/// Helper function to create a CPU with reset vector at 0x8000 and IRQ vector at 0x9000
fn setup_cpu() -> Cpu {
    let mut cpu = Cpu::with_entry_point(&[], 0x8000, 0x8000).unwrap();
    cpu.memory_mut().write(0xFFFE, 0x00);
    cpu.memory_mut().write(0xFFFF, 0x90);
    cpu.set_sp(0xFF);
    cpu.initialize();
    cpu
}

#[test]
fn test_brk_pushes_and_vectors() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x00);
    cpu.set_status(0x00);

    assert_eq!(cpu.step().unwrap(), 7);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFC);

    // Return address is BRK + 2
    assert_eq!(cpu.memory().read(0x01FF), 0x80);
    assert_eq!(cpu.memory().read(0x01FE), 0x02);
    // Pushed status has B and bit 5 set
    assert_eq!(cpu.memory().read(0x01FD), 0x30);

    assert!(cpu.flag_i());
    assert!(!cpu.status().brk());
}

#[test]
fn test_brk_pushes_current_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x00);
    cpu.set_status(0xC3);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x01FD), 0xF3);
}

#[test]
fn test_rti_restores_status_and_pc() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x40);
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0xD3); // N V B Z C
    cpu.memory_mut().write(0x01FE, 0x34);
    cpu.memory_mut().write(0x01FF, 0x12);

    assert_eq!(cpu.step().unwrap(), 6);
    assert_eq!(cpu.pc(), 0x1234); // no +1, unlike RTS
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.status().bits(), 0xE3); // B dropped, bit 5 forced
}

#[test]
fn test_brk_then_rti_round_trip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x00);
    cpu.memory_mut().write(0x9000, 0x40);
    cpu.set_status(0x01);

    cpu.step().unwrap();
    cpu.step().unwrap();

    // Resumes past the BRK signature byte
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_i());
    assert_eq!(cpu.cycles(), 13);
}
