//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR / RTS: subroutine call and return
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::addressing::AddressingMode;
use crate::memory::IRQ_VECTOR;
use crate::opcodes::Mnemonic;
use crate::status::Status;
use crate::{Cpu, ExecutionError};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Pushing the address of the BRK opcode plus 2 (high byte, then low byte)
/// 2. Pushing the processor status register with the B and reserved bits set
/// 3. Setting the I (interrupt disable) flag
/// 4. Loading the PC from the IRQ vector at addresses $FFFE (low) and $FFFF (high)
///
/// The byte following BRK is skipped on return; it is a signature byte, not an operand.
///
/// Cycle timing: 7 cycles (fixed)
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode from the opcode table (always Implied)
pub(crate) fn execute_brk(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    let return_address = cpu.pc.wrapping_add(2);
    cpu.implied(Mnemonic::Brk, mode)?;

    cpu.push_word(return_address);
    let pushed = cpu.status.pushed();
    cpu.push(pushed);

    cpu.status.set_interrupt_disable(true);
    cpu.pc = cpu.memory.read_word(IRQ_VECTOR);

    Ok(())
}

/// Executes the JMP (Jump) instruction.
///
/// Absolute: PC = operand. Indirect: PC = the word stored at the operand address. The
/// pointer's high byte is read from the next linear address, even across a page.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Absolute (0x4C) or Indirect (0x6C)
pub(crate) fn execute_jmp(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    match mode {
        AddressingMode::Absolute | AddressingMode::Indirect => {
            cpu.pc = cpu.operand_address(Mnemonic::Jmp, mode)?;
            Ok(())
        }
        _ => Err(ExecutionError::InvalidAddressingMode {
            mnemonic: Mnemonic::Jmp,
            mode,
        }),
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (high byte first), then
/// jumps to the absolute target. RTS adds the missing 1 back.
pub(crate) fn execute_jsr(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    if mode != AddressingMode::Absolute {
        return Err(ExecutionError::InvalidAddressingMode {
            mnemonic: Mnemonic::Jsr,
            mode,
        });
    }

    let target = cpu.operand_address(Mnemonic::Jsr, mode)?;
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = target;

    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and resumes at that address + 1.
pub(crate) fn execute_rts(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Rts, mode)?;
    cpu.pc = cpu.pull_word().wrapping_add(1);
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (B dropped, reserved bit forced), then the PC. Unlike RTS
/// the pulled address is used as-is.
pub(crate) fn execute_rti(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Rti, mode)?;
    let status = cpu.pull();
    cpu.status = Status::from_pulled(status);
    cpu.pc = cpu.pull_word();
    Ok(())
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), ExecutionError> {
    cpu.implied(Mnemonic::Nop, mode)
}
