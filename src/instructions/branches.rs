//! # Branch Instructions
//!
//! This module implements the eight conditional branches (BCC, BCS, BEQ, BNE, BMI, BPL,
//! BVC, BVS).
//!
//! All branch instructions use relative addressing with a signed 8-bit offset, measured
//! from the address of the following instruction. Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken
//! - 4 cycles if taken to a different page, under [`TimingMode::Strict`] only
//!
//! No flags are affected.

use crate::addressing::{AddressingMode, Operand};
use crate::config::TimingMode;
use crate::opcodes::Mnemonic;
use crate::{Cpu, ExecutionError};

/// Shared branch logic: resolve the target, then jump to it if `condition` holds.
fn branch(
    cpu: &mut Cpu,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    condition: bool,
) -> Result<(), ExecutionError> {
    if mode != AddressingMode::Relative {
        return Err(ExecutionError::InvalidAddressingMode { mnemonic, mode });
    }

    let target = match cpu.resolve(mode) {
        Operand::Address(target) => target,
        _ => return Err(ExecutionError::InvalidAddressingMode { mnemonic, mode }),
    };

    if condition {
        // PC already points past the branch
        let next = cpu.pc;
        cpu.extra_cycles += 1;
        if cpu.timing == TimingMode::Strict && (next & 0xFF00) != (target & 0xFF00) {
            cpu.extra_cycles += 1;
        }
        cpu.pc = target;
    }

    Ok(())
}

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode from the opcode table (always Relative)
pub(crate) fn execute_bcc(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let condition = !cpu.status.carry();
    branch(cpu, Mnemonic::Bcc, mode, condition)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let condition = cpu.status.carry();
    branch(cpu, Mnemonic::Bcs, mode, condition)
}

/// Executes the BEQ (Branch if Equal) instruction: taken when Z = 1.
pub(crate) fn execute_beq(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let condition = cpu.status.zero();
    branch(cpu, Mnemonic::Beq, mode, condition)
}

/// Executes the BNE (Branch if Not Equal) instruction: taken when Z = 0.
pub(crate) fn execute_bne(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let condition = !cpu.status.zero();
    branch(cpu, Mnemonic::Bne, mode, condition)
}

/// Executes the BMI (Branch if Minus) instruction: taken when N = 1.
pub(crate) fn execute_bmi(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let condition = cpu.status.negative();
    branch(cpu, Mnemonic::Bmi, mode, condition)
}

/// Executes the BPL (Branch if Plus) instruction: taken when N = 0.
pub(crate) fn execute_bpl(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let condition = !cpu.status.negative();
    branch(cpu, Mnemonic::Bpl, mode, condition)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let condition = !cpu.status.overflow();
    branch(cpu, Mnemonic::Bvc, mode, condition)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let condition = cpu.status.overflow();
    branch(cpu, Mnemonic::Bvs, mode, condition)
}
