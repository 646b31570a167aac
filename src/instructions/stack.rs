//! # Stack Instructions
//!
//! PHA/PHP push, PLA/PLP pull. The stack lives in page 1 and grows downward; S wraps
//! within the page in both directions.

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;
use crate::status::Status;
use crate::{Cpu, ExecutionError};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Pha, mode)?;
    let a = cpu.a;
    cpu.push(a);
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has B and the reserved bit set; the live register is unchanged.
pub(crate) fn execute_php(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Php, mode)?;
    let pushed = cpu.status.pushed();
    cpu.push(pushed);
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Pla, mode)?;
    cpu.a = cpu.pull();
    cpu.status.update_zero_negative(cpu.a);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Bit 4 of the pulled byte is discarded and bit 5 forced to 1.
pub(crate) fn execute_plp(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Plp, mode)?;
    let pulled = cpu.pull();
    cpu.status = Status::from_pulled(pulled);
    Ok(())
}
