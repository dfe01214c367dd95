//! Climber Headless Balance Simulator
//!
//! Runs seeded sessions through the real battle tick without any UI and
//! prints a balance report.
//!
//! Usage:
//!   cargo run --bin climber-sim -- [OPTIONS]
//!
//! Options:
//!   --ticks N         Ticks per run (default: 36000 = 10 hours at 1 tick/s)
//!   --seed N          RNG seed (default: 42)
//!   --runs N          Number of runs with incrementing seeds (default: 10)
//!   --config FILE     Engine config JSON
//!   --no-upgrade      Never spend gold
//!   --no-equip        Never equip drops
//!   --json            Print the report as JSON
//!   --verbose         Per-run summary lines
//!   --quiet           Only the final report

use climber::simulator::{run_simulation, SimConfig};
use climber::EngineConfig;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

struct CliArgs {
    sim: SimConfig,
    json: bool,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut sim = SimConfig {
        seed: Some(42),
        ..SimConfig::default()
    };
    let mut json = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                sim.max_ticks_per_run = number_arg(&args, i, "--ticks");
            }
            "--seed" => {
                i += 1;
                sim.seed = Some(number_arg(&args, i, "--seed"));
            }
            "--runs" => {
                i += 1;
                sim.num_runs = number_arg(&args, i, "--runs");
            }
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    fail("--config requires a file path");
                };
                sim.engine = match EngineConfig::load(path) {
                    Ok(config) => config,
                    Err(e) => fail(&format!("{path}: {e}")),
                };
            }
            "--no-upgrade" => sim.auto_upgrade = false,
            "--no-equip" => sim.auto_equip = false,
            "--json" => json = true,
            "--verbose" => sim.verbosity = 2,
            "--quiet" => sim.verbosity = 0,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => fail(&format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    CliArgs { sim, json }
}

fn number_arg<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|raw| raw.parse()) {
        Some(Ok(value)) => value,
        _ => fail(&format!("{flag} requires a number")),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    print_usage();
    std::process::exit(1);
}

fn print_usage() {
    eprintln!(
        "Climber Headless Balance Simulator\n\
         \n\
         Usage: climber-sim [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --ticks N       Ticks per run (default: 36000)\n\
         \x20 --seed N        RNG seed (default: 42)\n\
         \x20 --runs N        Number of runs with incrementing seeds (default: 10)\n\
         \x20 --config FILE   Engine config JSON\n\
         \x20 --no-upgrade    Never spend gold\n\
         \x20 --no-equip      Never equip drops\n\
         \x20 --json          Print the report as JSON\n\
         \x20 --verbose       Per-run summary lines\n\
         \x20 --quiet         Only the final report\n\
         \x20 --help, -h      Show this help"
    );
}

// ── Main ─────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let CliArgs { sim, json } = parse_args();

    if sim.verbosity >= 1 && !json {
        println!(
            "Simulating {} run(s) of {} ticks (seed {})...",
            sim.num_runs,
            sim.max_ticks_per_run,
            sim.seed.unwrap_or_default()
        );
    }

    let report = run_simulation(&sim);

    if json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }
}
