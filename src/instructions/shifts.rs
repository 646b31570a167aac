//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR operate either on the accumulator or, read-modify-write, on a
//! memory location. The bit shifted out lands in C; Z and N follow the result.
//! Read-modify-write forms never take a page-crossing penalty.

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;
use crate::status::Flag;
use crate::{Cpu, ExecutionError};

/// Applies `op` to the accumulator or to memory, depending on `mode`, and writes the
/// result back. `op` receives the carry bit going in and returns (result, carry out).
fn read_modify_write(
    cpu: &mut Cpu,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    op: impl FnOnce(u8, u8) -> (u8, u8),
) -> Result<(), ExecutionError> {
    let carry_in = cpu.status.carry_bit();

    let result = if mode == AddressingMode::Accumulator {
        cpu.resolve(mode);
        let (result, carry_out) = op(cpu.a, carry_in);
        cpu.status.set_bit(Flag::Carry, carry_out)?;
        cpu.a = result;
        result
    } else {
        let addr = cpu.target_address(mnemonic, mode)?;
        let (result, carry_out) = op(cpu.memory.read(addr), carry_in);
        cpu.status.set_bit(Flag::Carry, carry_out)?;
        cpu.memory.write(addr, result);
        result
    };

    cpu.status.update_zero_negative(result);
    Ok(())
}

/// Executes the ASL (Arithmetic Shift Left) instruction: C <- [7..0] <- 0.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Accumulator, or a memory mode from the opcode table
pub(crate) fn execute_asl(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    read_modify_write(cpu, Mnemonic::Asl, mode, |value, _| (value << 1, value >> 7))
}

/// Executes the LSR (Logical Shift Right) instruction: 0 -> [7..0] -> C.
///
/// N is always cleared since bit 7 of the result is 0.
pub(crate) fn execute_lsr(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    read_modify_write(cpu, Mnemonic::Lsr, mode, |value, _| (value >> 1, value & 1))
}

/// Executes the ROL (Rotate Left) instruction: C <- [7..0] <- C.
pub(crate) fn execute_rol(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    read_modify_write(cpu, Mnemonic::Rol, mode, |value, carry| {
        ((value << 1) | carry, value >> 7)
    })
}

/// Executes the ROR (Rotate Right) instruction: C -> [7..0] -> C.
pub(crate) fn execute_ror(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    read_modify_write(cpu, Mnemonic::Ror, mode, |value, carry| {
        ((value >> 1) | (carry << 7), value & 1)
    })
}
