//! # Flag Instructions
//!
//! Single-flag set and clear operations (CLC, SEC, CLI, SEI, CLD, SED, CLV). Each takes
//! 2 cycles and touches only its own flag.

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;
use crate::status::Flag;
use crate::{Cpu, ExecutionError};

fn write_flag(
    cpu: &mut Cpu,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    flag: Flag,
    on: bool,
) -> Result<(), ExecutionError> {
    cpu.implied(mnemonic, mode)?;
    cpu.status.set(flag, on);
    Ok(())
}

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    write_flag(cpu, Mnemonic::Clc, mode, Flag::Carry, false)
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    write_flag(cpu, Mnemonic::Sec, mode, Flag::Carry, true)
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    write_flag(cpu, Mnemonic::Cli, mode, Flag::InterruptDisable, false)
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    write_flag(cpu, Mnemonic::Sei, mode, Flag::InterruptDisable, true)
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    write_flag(cpu, Mnemonic::Cld, mode, Flag::Decimal, false)
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// The flag is stored and pushed like any other; ADC and SBC stay binary.
pub(crate) fn execute_sed(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    write_flag(cpu, Mnemonic::Sed, mode, Flag::Decimal, true)
}

/// Executes the CLV (Clear Overflow Flag) instruction. There is no SEV.
pub(crate) fn execute_clv(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    write_flag(cpu, Mnemonic::Clv, mode, Flag::Overflow, false)
}
