//! Dungeon balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze run balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100 --extended # 100 extended runs
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use lorecrawl::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              LORECRAWL BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!(
        "  Dungeon:        {} floors",
        if config.extended_dungeon { 8 } else { 5 }
    );
    println!(
        "  Accuracy:       P{:.0}/C{:.0}/p{:.0}/W{:.0}",
        config.perfect_rate * 100.0,
        config.correct_rate * 100.0,
        config.partial_rate * 100.0,
        config.wrong_rate * 100.0
    );
    println!("  Evolution Tier: {}", config.evolution_tier);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = match config.seed {
            Some(seed) => format!("sim_report_seed{}.json", seed),
            None => "sim_report.json".to_string(),
        };
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => eprintln!("Failed to write JSON report: {}", err),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--tier" => {
                if i + 1 < args.len() {
                    config.evolution_tier = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--extended" => {
                config.extended_dungeon = true;
            }
            "--struggling" => {
                let num_runs = config.num_runs;
                config = SimConfig::struggling_learner(num_runs);
            }
            "--mastery" => {
                let num_runs = config.num_runs;
                config = SimConfig::mastery_learner(num_runs);
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs N      Number of runs (default: 1000)");
    println!("  -s, --seed N      RNG seed for reproducibility");
    println!("  -t, --tier N      Evolution tier of the simulated deck (0-3)");
    println!("      --extended    Use the 8-floor extended dungeon");
    println!("      --struggling  Low-accuracy learner profile");
    println!("      --mastery     High-accuracy learner profile");
    println!("      --json        Also write the report as JSON");
    println!("  -v, --verbose     Per-run logging");
    println!("  -q, --quiet       Suppress the summary");
    println!("  -h, --help        Show this help");
}
