//! Trace a Collatz tag system on a 64-cell tape.
//!
//! Usage:
//!
//! ```text
//! collatz-trace [N]                 # start from a^N (default 7)
//! collatz-trace --config run.json   # run a MachineConfig instead
//! ```

use std::process::ExitCode;

use rust_tag::run::run_config;
use rust_tag::systems::collatz;
use rust_tag::{MachineConfig, Symbol, TagEngine, TagResult, Tape};
use tracing::{error, info};

const CAPACITY: usize = 64;

fn print_status(label: &str, engine: &TagEngine, tape: &Tape<CAPACITY>) {
    println!("{label}: {}", engine.render(tape));
    println!(
        "  running: {}  has space: {}  remaining capacity: {}",
        tape.is_running(),
        tape.has_space_remaining(),
        tape.remaining_capacity()
    );
}

fn run_collatz(n: usize) -> TagResult<()> {
    let engine = collatz::engine();

    let mut buffer = [Symbol::default(); CAPACITY];
    let seed = collatz::word(n.min(CAPACITY));
    buffer[..seed.len()].copy_from_slice(&seed);
    let mut tape = Tape::<CAPACITY>::from_buffer(&buffer, n)?;

    info!(n, capacity = CAPACITY, "collatz trace");
    print!("{}", engine.rules());
    print_status("initial", &engine, &tape);

    engine.steps(&mut tape, 25);
    print_status("after 25 steps", &engine, &tape);

    engine.steps(&mut tape, 32);
    print_status("after 57 steps", &engine, &tape);
    Ok(())
}

fn run_file(path: &str) -> TagResult<()> {
    let json = std::fs::read_to_string(path)?;
    let config = MachineConfig::from_json(&json)?;
    let alphabet = config.alphabet()?;

    let report = run_config::<CAPACITY>(&config)?;
    if let Some(trace) = &report.trace {
        for line in trace.lines(alphabet) {
            println!("{line}");
        }
    }
    println!("final: {}", report.rendered);
    println!(
        "  running: {}  has space: {}  remaining capacity: {}",
        report.is_running(),
        report.has_space_remaining(),
        report.remaining_capacity()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [flag, path] if flag == "--config" => run_file(path),
        [n] => match n.parse() {
            Ok(n) => run_collatz(n),
            Err(_) => {
                error!(arg = %n, "expected a positive integer");
                return ExitCode::FAILURE;
            }
        },
        [] => run_collatz(7),
        _ => {
            error!("usage: collatz-trace [N] | --config <path>");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}
