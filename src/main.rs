use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use emu6502::{Cpu, CpuConfig, RunOutcome, TimingMode};

/// Run a raw 6502 ROM image
#[derive(Parser)]
#[command(name = "emu6502", version)]
struct Args {
    /// Path to the ROM image
    rom: PathBuf,

    /// Address the first ROM byte is loaded at (hex: 0x0600 or $0600)
    #[arg(long, value_parser = parse_u16)]
    load_address: Option<u16>,

    /// Entry point written into the reset vector; 0 keeps the ROM's own vector
    #[arg(long, value_parser = parse_u16)]
    entry: Option<u16>,

    /// Initial stack pointer
    #[arg(long, value_parser = parse_u8)]
    stack_pointer: Option<u8>,

    /// Charge page-crossing penalties
    #[arg(long, default_value_t = false)]
    strict_timing: bool,

    /// Stop when PC reaches this address
    #[arg(long, value_parser = parse_u16)]
    break_at: Option<u16>,

    /// Stop after this many cycles
    #[arg(long, default_value_t = 100_000_000)]
    max_cycles: u64,

    /// JSON file with CPU settings; command-line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every executed instruction
    #[arg(long, default_value_t = false)]
    trace: bool,

    /// Write the final register state to this file as JSON
    #[arg(long)]
    state_out: Option<PathBuf>,
}

fn parse_hex(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'));
    match digits {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    }
    .map_err(|e| format!("invalid number '{}': {}", s, e))
}

fn parse_u16(s: &str) -> Result<u16, String> {
    let value = parse_hex(s)?;
    u16::try_from(value).map_err(|_| format!("'{}' does not fit in 16 bits", s))
}

fn parse_u8(s: &str) -> Result<u8, String> {
    let value = parse_hex(s)?;
    u8::try_from(value).map_err(|_| format!("'{}' does not fit in 8 bits", s))
}

fn build_config(args: &Args) -> Result<CpuConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CpuConfig::default(),
    };

    if let Some(load_address) = args.load_address {
        config.load_address = load_address;
    }
    if args.entry.is_some() {
        config.entry_point = args.entry;
    }
    if args.stack_pointer.is_some() {
        config.stack_pointer = args.stack_pointer;
    }
    if args.strict_timing {
        config.timing = TimingMode::Strict;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.trace {
        logger.filter_module("emu6502", log::LevelFilter::Trace);
    }
    logger.init();

    let config = build_config(&args)?;
    let rom = fs::read(&args.rom).with_context(|| format!("reading ROM {}", args.rom.display()))?;

    let mut cpu = Cpu::from_config(&rom, &config)?;
    cpu.initialize();

    let outcome = cpu.run_until(args.break_at, args.max_cycles);
    let snapshot = cpu.snapshot();

    if let Some(path) = &args.state_out {
        let mut f = File::create(path)?;
        write!(f, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    }

    match outcome? {
        RunOutcome::Breakpoint(pc) => println!("Breakpoint at ${:04X}", pc),
        RunOutcome::Trapped(pc) => println!("Trapped at ${:04X}", pc),
        RunOutcome::CycleLimit => println!("Cycle limit of {} reached", args.max_cycles),
    }
    println!("{}", snapshot);

    Ok(())
}
