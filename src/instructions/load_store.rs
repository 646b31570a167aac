//! # Load and Store Instructions
//!
//! This module implements register/memory transfers:
//! - LDA, LDX, LDY: load a register from memory, updating Z and N
//! - STA, STX, STY: store a register to memory, no flags affected
//!
//! Indexed loads may take the strict-timing page-crossing penalty. Stores never do; their
//! base cost already includes the extra cycle.

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;
use crate::{Cpu, ExecutionError};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode from the opcode table
pub(crate) fn execute_lda(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.a = cpu.read_operand(Mnemonic::Lda, mode)?;
    cpu.status.update_zero_negative(cpu.a);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.x = cpu.read_operand(Mnemonic::Ldx, mode)?;
    cpu.status.update_zero_negative(cpu.x);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.y = cpu.read_operand(Mnemonic::Ldy, mode)?;
    cpu.status.update_zero_negative(cpu.y);
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode from the opcode table; Immediate is rejected
pub(crate) fn execute_sta(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let addr = cpu.target_address(Mnemonic::Sta, mode)?;
    cpu.memory.write(addr, cpu.a);
    Ok(())
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let addr = cpu.target_address(Mnemonic::Stx, mode)?;
    cpu.memory.write(addr, cpu.x);
    Ok(())
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let addr = cpu.target_address(Mnemonic::Sty, mode)?;
    cpu.memory.write(addr, cpu.y);
    Ok(())
}
