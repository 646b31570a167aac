//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC / SBC: binary add and subtract with carry (the D flag never changes the result)
//! - AND / ORA / EOR: bitwise logic into the accumulator
//! - CMP / CPX / CPY: register-versus-memory compares
//! - BIT: bit test

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;
use crate::status::Flag;
use crate::{Cpu, ExecutionError};

/// Adds `value` and the carry into the accumulator, setting N, V, Z and C.
///
/// Shared by ADC and SBC: subtraction is addition of the one's complement.
fn add_with_carry(cpu: &mut Cpu, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.status.carry_bit() as u16;
    let result = sum as u8;

    cpu.status.set_carry(sum > 0xFF);
    // Operands share a sign and the result's sign differs
    cpu.status
        .set_overflow((!(a ^ value) & (a ^ result) & 0x80) != 0);
    cpu.status.update_zero_negative(result);
    cpu.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. Updates N, V, Z and C.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode from the opcode table
pub(crate) fn execute_adc(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(Mnemonic::Adc, mode)?;
    add_with_carry(cpu, value);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C). Carry is set when no borrow occurred.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode from the opcode table
pub(crate) fn execute_sbc(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(Mnemonic::Sbc, mode)?;
    add_with_carry(cpu, !value);
    Ok(())
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(Mnemonic::And, mode)?;
    cpu.a &= value;
    cpu.status.update_zero_negative(cpu.a);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(Mnemonic::Ora, mode)?;
    cpu.a |= value;
    cpu.status.update_zero_negative(cpu.a);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(Mnemonic::Eor, mode)?;
    cpu.a ^= value;
    cpu.status.update_zero_negative(cpu.a);
    Ok(())
}

/// Compares `register` with `value` as if by subtraction, without storing the result.
///
/// C = register >= value, Z = equal, N = bit 7 of the difference.
fn compare(cpu: &mut Cpu, register: u8, value: u8) {
    let diff = register.wrapping_sub(value);
    cpu.status.set_carry(register >= value);
    cpu.status.update_zero_negative(diff);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(Mnemonic::Cmp, mode)?;
    let register = cpu.a;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(Mnemonic::Cpx, mode)?;
    let register = cpu.x;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(Mnemonic::Cpy, mode)?;
    let register = cpu.y;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A AND M. N and V are copied from bits 7 and 6 of M. The accumulator
/// and the carry are left unchanged.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode from the opcode table (zero page or absolute)
pub(crate) fn execute_bit(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(Mnemonic::Bit, mode)?;

    cpu.status.set_zero(cpu.a & value == 0);
    cpu.status.set_bit(Flag::Negative, value >> 7)?;
    cpu.status.set_bit(Flag::Overflow, (value >> 6) & 1)?;

    Ok(())
}
