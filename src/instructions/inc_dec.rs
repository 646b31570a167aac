//! # Increment and Decrement Instructions
//!
//! INC/DEC modify memory; INX/INY/DEX/DEY modify an index register. All wrap modulo
//! 256 and update only Z and N.

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;
use crate::{Cpu, ExecutionError};

/// Adds `delta` (wrapping) to the byte at the resolved address.
fn step_memory(
    cpu: &mut Cpu,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    delta: u8,
) -> Result<(), ExecutionError> {
    let addr = cpu.target_address(mnemonic, mode)?;
    let result = cpu.memory.read(addr).wrapping_add(delta);
    cpu.memory.write(addr, result);
    cpu.status.update_zero_negative(result);
    Ok(())
}

/// Executes the INC (Increment Memory) instruction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode from the opcode table
pub(crate) fn execute_inc(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    step_memory(cpu, Mnemonic::Inc, mode, 1)
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    step_memory(cpu, Mnemonic::Dec, mode, 0xFF)
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Inx, mode)?;
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.update_zero_negative(cpu.x);
    Ok(())
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Iny, mode)?;
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.update_zero_negative(cpu.y);
    Ok(())
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Dex, mode)?;
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.update_zero_negative(cpu.x);
    Ok(())
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Dey, mode)?;
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.update_zero_negative(cpu.y);
    Ok(())
}
