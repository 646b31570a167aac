//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor and the
//! resolver that turns an instruction's operand bytes into an effective address.
//!
//! Resolution always starts with PC pointing at the opcode byte and always leaves PC
//! pointing at the next instruction, i.e. advanced by [`AddressingMode::size_bytes`].

use crate::config::TimingMode;
use crate::opcodes::Mnemonic;
use crate::{Cpu, ExecutionError};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Signed 8-bit offset for branch instructions, relative to the following instruction.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    Indirect,

    /// 16-bit address indexed by X, wrapping at 0xFFFF.
    AbsoluteX,

    /// 16-bit address indexed by Y, wrapping at 0xFFFF.
    AbsoluteY,

    /// Zero page address indexed by X, wrapping within the zero page.
    ///
    /// Example: LDA $FF,X with X = 2 reads $01, never $0101.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ZeroPageY,

    /// Indexed indirect `(zp,X)`: add X to the zero-page operand, then dereference.
    IndirectX,

    /// Indirect indexed `(zp),Y`: dereference the zero-page operand, then add Y.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        use AddressingMode::*;
        match self {
            Accumulator | Implied => 0,
            Immediate | Relative | ZeroPage | ZeroPageX | ZeroPageY | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Total instruction length, opcode included.
    pub const fn size_bytes(self) -> u8 {
        self.operand_bytes() + 1
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (Implied).
    None,
    /// Operate on the accumulator.
    Accumulator,
    /// Effective memory address. For Immediate this is the address of the operand byte.
    Address(u16),
}

impl Cpu {
    /// Resolves `mode` against the instruction at PC and advances PC past it.
    ///
    /// For indexed modes the page-crossing flag is recorded so strict timing can charge
    /// the extra read cycle.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Operand {
        use AddressingMode::*;

        let pc = self.pc;
        let operand_addr = pc.wrapping_add(1);

        let operand = match mode {
            Implied => Operand::None,
            Accumulator => Operand::Accumulator,
            Immediate => Operand::Address(operand_addr),
            ZeroPage => Operand::Address(self.memory.read(operand_addr) as u16),
            ZeroPageX => {
                let zp = self.memory.read(operand_addr).wrapping_add(self.x);
                Operand::Address(zp as u16)
            }
            ZeroPageY => {
                let zp = self.memory.read(operand_addr).wrapping_add(self.y);
                Operand::Address(zp as u16)
            }
            Absolute => Operand::Address(self.memory.read_word(operand_addr)),
            AbsoluteX => {
                let base = self.memory.read_word(operand_addr);
                Operand::Address(self.indexed(base, self.x))
            }
            AbsoluteY => {
                let base = self.memory.read_word(operand_addr);
                Operand::Address(self.indexed(base, self.y))
            }
            Indirect => {
                let pointer = self.memory.read_word(operand_addr);
                Operand::Address(self.memory.read_word(pointer))
            }
            IndirectX => {
                let zp = self.memory.read(operand_addr).wrapping_add(self.x);
                Operand::Address(self.memory.read_zero_page_word(zp))
            }
            IndirectY => {
                let zp = self.memory.read(operand_addr);
                let base = self.memory.read_zero_page_word(zp);
                Operand::Address(self.indexed(base, self.y))
            }
            Relative => {
                let offset = self.memory.read(operand_addr) as i8;
                let next = pc.wrapping_add(mode.size_bytes() as u16);
                Operand::Address(next.wrapping_add_signed(offset as i16))
            }
        };

        self.pc = pc.wrapping_add(mode.size_bytes() as u16);
        operand
    }

    fn indexed(&mut self, base: u16, index: u8) -> u16 {
        let addr = base.wrapping_add(index as u16);
        self.page_crossed = (base & 0xFF00) != (addr & 0xFF00);
        addr
    }

    /// Resolves a mode that must yield a memory address.
    pub(crate) fn operand_address(
        &mut self,
        mnemonic: Mnemonic,
        mode: AddressingMode,
    ) -> Result<u16, ExecutionError> {
        if mode == AddressingMode::Relative {
            return Err(ExecutionError::InvalidAddressingMode { mnemonic, mode });
        }
        match self.resolve(mode) {
            Operand::Address(addr) => Ok(addr),
            Operand::None | Operand::Accumulator => {
                Err(ExecutionError::InvalidAddressingMode { mnemonic, mode })
            }
        }
    }

    /// Resolves a destination address for a store or read-modify-write.
    pub(crate) fn target_address(
        &mut self,
        mnemonic: Mnemonic,
        mode: AddressingMode,
    ) -> Result<u16, ExecutionError> {
        if mode == AddressingMode::Immediate {
            return Err(ExecutionError::InvalidAddressingMode { mnemonic, mode });
        }
        self.operand_address(mnemonic, mode)
    }

    /// Resolves and reads a data operand, charging the strict-timing page penalty.
    pub(crate) fn read_operand(
        &mut self,
        mnemonic: Mnemonic,
        mode: AddressingMode,
    ) -> Result<u8, ExecutionError> {
        let addr = self.operand_address(mnemonic, mode)?;
        if self.timing == TimingMode::Strict && self.page_crossed {
            self.extra_cycles += 1;
        }
        Ok(self.memory.read(addr))
    }

    /// Checks that an implied-only instruction was dispatched as Implied and steps past it.
    pub(crate) fn implied(
        &mut self,
        mnemonic: Mnemonic,
        mode: AddressingMode,
    ) -> Result<(), ExecutionError> {
        match self.resolve(mode) {
            Operand::None => Ok(()),
            _ => Err(ExecutionError::InvalidAddressingMode { mnemonic, mode }),
        }
    }
}
