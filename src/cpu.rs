//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct, the single owner of all processor state, and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (S): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status register**: packed NV-BDIZC flags
//! - **Memory**: the flat 64KB image
//! - **Cycle accounting**: cost of the last instruction and a running total
//!
//! ## Lifecycle
//!
//! A CPU is built from a ROM image, then [`Cpu::initialize`] loads PC from the reset
//! vector. Calling [`Cpu::step`] before that fails with
//! [`ExecutionError::NotInitialized`]. Each `step` executes exactly one instruction.

use log::{debug, trace};
use serde::Serialize;

use crate::config::{CpuConfig, TimingMode};
use crate::disassembler::{decoder, formatter};
use crate::memory::{Memory, RESET_VECTOR, STACK_BASE};
use crate::opcodes;
use crate::status::{Flag, Status};
use crate::ExecutionError;

/// 6502 CPU state and execution context.
///
/// # Examples
///
/// ```
/// use emu6502::Cpu;
///
/// // LDA #$05 ; TAX
/// let mut cpu = Cpu::new(&[0xA9, 0x05, 0xAA], 0x0000).unwrap();
/// cpu.set_sp(0xFF);
/// cpu.initialize();
///
/// assert_eq!(cpu.step().unwrap(), 2);
/// assert_eq!(cpu.a(), 0x05);
/// assert_eq!(cpu.pc(), 0x0002);
///
/// cpu.step().unwrap();
/// assert_eq!(cpu.x(), 0x05);
/// assert_eq!(cpu.pc(), 0x0003);
/// ```
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives the full stack address)
    pub(crate) sp: u8,

    pub(crate) status: Status,

    pub(crate) memory: Memory,

    /// Set once the reset vector has been loaded.
    initialized: bool,

    /// Opcode byte of the instruction most recently fetched.
    current_opcode: u8,

    /// Cost of the instruction most recently executed.
    last_cycles: u8,

    /// Total cycles executed since construction.
    pub(crate) cycles: u64,

    pub(crate) timing: TimingMode,

    /// Penalty cycles added by the current instruction on top of its base cost.
    pub(crate) extra_cycles: u8,

    /// Whether the last indexed address computation crossed a page.
    pub(crate) page_crossed: bool,
}

/// Why [`Cpu::run_until`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    /// PC reached the requested stop address before executing it.
    Breakpoint(u16),
    /// An instruction jumped or branched to itself.
    Trapped(u16),
    /// The cycle budget was spent.
    CycleLimit,
}

/// Read-only copy of the register file, for tracing and debugger views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CpuSnapshot {
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub status: u8,
    pub current_opcode: u8,
    pub last_cycles: u8,
    pub cycles: u64,
}

impl std::fmt::Display for CpuSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} S:{:02X} P:{:02X} [{}] CYC:{}",
            self.pc,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.status,
            Status::from_bits(self.status),
            self.cycles
        )
    }
}

impl Cpu {
    /// Creates a CPU with `rom` copied into memory at `load_address`.
    ///
    /// The image must already hold a valid reset vector at 0xFFFC/0xFFFD unless one is
    /// installed with [`Cpu::with_entry_point`]. All registers start at zero except the
    /// reserved status bit.
    pub fn new(rom: &[u8], load_address: u16) -> Result<Self, ExecutionError> {
        Ok(Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            status: Status::new(),
            memory: Memory::with_image(rom, load_address)?,
            initialized: false,
            current_opcode: 0x00,
            last_cycles: 0,
            cycles: 0,
            timing: TimingMode::Base,
            extra_cycles: 0,
            page_crossed: false,
        })
    }

    /// Like [`Cpu::new`], but also writes `entry_point` into the reset vector.
    ///
    /// An entry point of zero leaves the image's own vector in place.
    pub fn with_entry_point(
        rom: &[u8],
        load_address: u16,
        entry_point: u16,
    ) -> Result<Self, ExecutionError> {
        let mut cpu = Self::new(rom, load_address)?;
        if entry_point != 0 {
            cpu.memory.write_word(RESET_VECTOR, entry_point);
        }
        Ok(cpu)
    }

    /// Builds a CPU from `rom` using every setting in `config`.
    pub fn from_config(rom: &[u8], config: &CpuConfig) -> Result<Self, ExecutionError> {
        let mut cpu = Self::with_entry_point(
            rom,
            config.load_address,
            config.effective_entry_point().unwrap_or(0),
        )?;
        if let Some(sp) = config.stack_pointer {
            cpu.sp = sp;
        }
        cpu.timing = config.timing;
        Ok(cpu)
    }

    /// Loads PC from the reset vector and marks the CPU ready to step.
    ///
    /// Calling it again acts as a reset of PC; registers and memory are left alone.
    pub fn initialize(&mut self) {
        self.pc = self.memory.read_word(RESET_VECTOR);
        self.initialized = true;
        debug!("reset vector loaded, PC = {:#06X}", self.pc);
    }

    /// Executes one instruction and returns its cycle cost.
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::NotInitialized`] before [`Cpu::initialize`]
    /// - [`ExecutionError::UnimplementedOpcode`] for a byte with no table entry; PC stays
    ///   on the offending byte and no cycles are charged
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Cpu, ExecutionError};
    ///
    /// let mut cpu = Cpu::new(&[0xEA, 0x02], 0x0000).unwrap();
    /// assert_eq!(cpu.step(), Err(ExecutionError::NotInitialized));
    ///
    /// cpu.initialize();
    /// assert_eq!(cpu.step(), Ok(2)); // NOP
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnimplementedOpcode { opcode: 0x02, pc: 0x0001 })
    /// );
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if !self.initialized {
            return Err(ExecutionError::NotInitialized);
        }

        let pc = self.pc;
        let opcode = self.memory.read(pc);
        self.current_opcode = opcode;

        let entry = opcodes::lookup(opcode)
            .ok_or(ExecutionError::UnimplementedOpcode { opcode, pc })?;

        if log::log_enabled!(log::Level::Trace) {
            trace!("{:<14} {}", self.disassemble_at(pc), self.snapshot());
        }

        self.extra_cycles = 0;
        self.page_crossed = false;

        (entry.handler)(self, entry.addressing_mode)?;

        let cost = entry.base_cycles + self.extra_cycles;
        self.last_cycles = cost;
        self.cycles += cost as u64;
        Ok(cost)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Returns the cycles actually consumed, which may overshoot the budget by part of
    /// one instruction.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Steps until PC reaches `stop_at`, an instruction traps on itself, or
    /// `max_cycles` have been spent.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Cpu, RunOutcome};
    ///
    /// // INX ; JMP $0001
    /// let mut cpu = Cpu::new(&[0xE8, 0x4C, 0x01, 0x00], 0x0000).unwrap();
    /// cpu.initialize();
    ///
    /// assert_eq!(cpu.run_until(None, 1_000).unwrap(), RunOutcome::Trapped(0x0001));
    /// assert_eq!(cpu.x(), 1);
    /// ```
    pub fn run_until(
        &mut self,
        stop_at: Option<u16>,
        max_cycles: u64,
    ) -> Result<RunOutcome, ExecutionError> {
        let start_cycles = self.cycles;

        let outcome = loop {
            if Some(self.pc) == stop_at {
                break RunOutcome::Breakpoint(self.pc);
            }
            if self.cycles - start_cycles >= max_cycles {
                break RunOutcome::CycleLimit;
            }

            let pc = self.pc;
            self.step()?;
            if self.pc == pc {
                break RunOutcome::Trapped(pc);
            }
        };

        debug!(
            "run stopped after {} cycles: {:?}",
            self.cycles - start_cycles,
            outcome
        );
        Ok(outcome)
    }

    // ========== Stack ==========

    /// Pushes a byte: write to 0x0100 | S, then decrement S (wrapping within page 1).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increment S (wrapping within page 1), then read 0x0100 | S.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word high byte first, so it sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    /// Pulls a word low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Debugging ==========

    /// Disassembles the instruction at `addr` without touching CPU state.
    pub fn disassemble_at(&self, addr: u16) -> String {
        let bytes = [
            self.memory.read(addr),
            self.memory.read(addr.wrapping_add(1)),
            self.memory.read(addr.wrapping_add(2)),
        ];
        match decoder::decode_instruction(&bytes, addr) {
            Some(instr) => formatter::format_instruction(&instr),
            None => format!(".byte ${:02X}", bytes[0]),
        }
    }

    /// Copies the register file.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.pc,
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            status: self.status.bits(),
            current_opcode: self.current_opcode,
            last_cycles: self.last_cycles,
            cycles: self.cycles,
        }
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 | S. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the packed status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Opcode byte of the most recently fetched instruction.
    pub fn current_opcode(&self) -> u8 {
        self.current_opcode
    }

    /// Cycle cost of the most recently executed instruction.
    pub fn last_cycles(&self) -> u8 {
        self.last_cycles
    }

    /// Total cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn timing(&self) -> TimingMode {
        self.timing
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    // ========== Status Flag Getters ==========

    pub fn flag(&self, flag: Flag) -> bool {
        self.status.get(flag)
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.negative()
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.overflow()
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.decimal()
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.interrupt_disable()
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.zero()
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.carry()
    }

    // ========== Fixture Setters ==========
    //
    // Hosts use these to stage startup state (S is not self-initializing) and tests use
    // them to build pre-states.

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the status register; the reserved bit stays set.
    pub fn set_status(&mut self, bits: u8) {
        self.status = Status::from_bits(bits);
    }

    pub fn set_flag(&mut self, flag: Flag, on: bool) {
        self.status.set(flag, on);
    }

    pub fn set_timing(&mut self, timing: TimingMode) {
        self.timing = timing;
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }
}
