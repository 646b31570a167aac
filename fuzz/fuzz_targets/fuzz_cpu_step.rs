//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents, then executes a short
//! burst of instructions to find edge cases and panics.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{Cpu, ExecutionError, TimingMode};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    strict_timing: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the entry point (a few instructions)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = match Cpu::with_entry_point(&input.memory.program, 0x8000, 0x8000) {
        Ok(cpu) => cpu,
        Err(_) => return,
    };

    let memory = cpu.memory_mut();
    memory.write_word(0xFFFE, 0x9000);
    memory.load(&input.memory.zero_page, 0x0000).unwrap();
    memory.load(&input.memory.stack_page, 0x0100).unwrap();
    memory.load(&input.memory.main_memory, 0x4000).unwrap();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    if input.cpu_state.strict_timing {
        cpu.set_timing(TimingMode::Strict);
    }
    cpu.initialize();

    for _ in 0..input.steps {
        let before = cpu.cycles();
        match cpu.step() {
            Ok(cycles) => {
                // Base cost plus at most two penalty cycles
                assert!((2..=9).contains(&cycles));
                assert_eq!(cpu.cycles(), before + cycles as u64);
            }
            Err(ExecutionError::UnimplementedOpcode { .. }) => {
                assert_eq!(cpu.cycles(), before);
                break;
            }
            Err(e) => panic!("unexpected error: {}", e),
        }
        assert!(cpu.status().bits() & 0x20 != 0);
    }
});
