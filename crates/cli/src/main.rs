//! RiSC-16 golden-model simulator CLI.
//!
//! This binary is the reference front end for RTL validation runs. It
//! performs:
//! 1. **Loading:** Parses the hex-line program image into memory.
//! 2. **Execution:** Runs the bounded fetch-decode-execute loop, optionally
//!    stopping at the halt encoding.
//! 3. **Reporting:** Dumps the final architectural state (registers, sparse
//!    memory, PC, halt flag) human-readable or as JSON, plus step statistics.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use r16sim_core::Config;
use r16sim_core::sim::loader;
use r16sim_core::sim::{ArchState, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "r16sim",
    author,
    version,
    about = "RiSC-16 golden-model simulator",
    long_about = "Execute a RiSC-16 program image and report the final architectural state.\n\nThe image format is one hexadecimal 16-bit word per line, loaded from address 0.\n\nExamples:\n  r16sim -p program.hex -n 1000 -s\n  r16sim -p program.hex -n 1000 -s --json > state.json\n  r16sim -p program.hex -n 16 -d"
)]
struct Cli {
    /// Program image file: one hexadecimal 16-bit word per line.
    #[arg(short = 'p', long)]
    program_file: String,

    /// Maximum number of instructions to execute.
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    nsteps: u64,

    /// Exit the run loop as soon as the halt encoding is reached.
    #[arg(short = 's', long)]
    stop_on_halt: bool,

    /// Per-step trace output on stderr (fetches, decodes, register and
    /// memory traffic).
    #[arg(short = 'd', long)]
    debug: bool,

    /// Dump the final architectural state as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = Config {
        trace_instructions: cli.debug,
        stop_on_halt: cli.stop_on_halt,
    };
    init_tracing(&config);

    let image = loader::load_image(&cli.program_file).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });

    let mut sim = Simulator::new(image, &config);
    match sim.run(cli.nsteps) {
        Ok(outcome) => {
            if outcome.halted {
                println!("[*] Halted after {} steps", outcome.steps);
            } else {
                println!(
                    "[*] Step budget exhausted after {} steps (pc = {:#06x})",
                    outcome.steps, sim.cpu.pc
                );
            }
            report_state(&sim, cli.json);
            sim.cpu.stats.print();
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            sim.cpu.dump_state();
            process::exit(1);
        }
    }
}

/// Installs the tracing subscriber on stderr.
///
/// `RUST_LOG` overrides the level; otherwise tracing defaults to TRACE when
/// per-step tracing is requested and WARN when not.
fn init_tracing(config: &Config) {
    let default = if config.trace_instructions {
        "trace"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the comparison surface: registers, PC, halt flag, sparse memory.
fn report_state(sim: &Simulator, json: bool) {
    if json {
        let state = ArchState::capture(&sim.cpu);
        match state.to_json() {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("\n[!] FATAL: failed to serialize state: {e}");
                process::exit(1);
            }
        }
        return;
    }

    sim.cpu.dump_state();
    if sim.cpu.mem.is_empty() {
        println!("mem: (all zero)");
    } else {
        for (addr, word) in sim.cpu.mem.words() {
            println!("mem[{addr:#06x}] = {word:#06x}");
        }
    }
}
