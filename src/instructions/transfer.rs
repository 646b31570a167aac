//! # Register Transfer Instructions
//!
//! Copies between A, X, Y and S. Every transfer updates Z and N from the copied value
//! except TXS, which affects no flags.

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;
use crate::{Cpu, ExecutionError};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode from the opcode table (always Implied)
pub(crate) fn execute_tax(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Tax, mode)?;
    cpu.x = cpu.a;
    cpu.status.update_zero_negative(cpu.x);
    Ok(())
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Tay, mode)?;
    cpu.y = cpu.a;
    cpu.status.update_zero_negative(cpu.y);
    Ok(())
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Txa, mode)?;
    cpu.a = cpu.x;
    cpu.status.update_zero_negative(cpu.a);
    Ok(())
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Tya, mode)?;
    cpu.a = cpu.y;
    cpu.status.update_zero_negative(cpu.a);
    Ok(())
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Tsx, mode)?;
    cpu.x = cpu.sp;
    cpu.status.update_zero_negative(cpu.x);
    Ok(())
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction. No flags are affected.
pub(crate) fn execute_txs(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Txs, mode)?;
    cpu.sp = cpu.x;
    Ok(())
}
