//! Headless dungeon simulator CLI.
//!
//! Runs one full session with scripted input and prints a report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # Default patrol run
//!   cargo run --bin simulate -- --seed 42 --ticks 600
//!   cargo run --bin simulate -- --script idle --json

use anyhow::{bail, Context, Result};
use delve::simulator::{run_simulation, ScriptKind, SimConfig};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args: Vec<String> = env::args().collect();
    let Some((config, write_json)) = parse_args(&args)? else {
        print_help();
        return Ok(());
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 DELVE DUNGEON SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Seed:           {}", config.seed);
    println!("  Max Ticks:      {}", config.max_ticks);
    println!("  Tick Length:    {:.4}s", config.delta_time);
    println!("  Map:            {}x{}", config.map_width, config.map_height);
    println!("  Script:         {:?}", config.script);
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("failed to write JSON report to {}", filename))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

/// Returns `None` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<(SimConfig, bool)>> {
    let mut config = SimConfig::default();
    let mut write_json = false;

    // A config file is the base layer; flags override it wherever they appear.
    if let Some(index) = args.iter().position(|a| a == "--config") {
        let path = args
            .get(index + 1)
            .map(PathBuf::from)
            .context("--config needs a file path")?;
        config = SimConfig::load(&path)
            .with_context(|| format!("loading {}", path.display()))?;
    }

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-s" | "--seed" => {
                config.seed = parse_value(value, "--seed")?;
                i += 1;
            }
            "-t" | "--ticks" => {
                config.max_ticks = parse_value(value, "--ticks")?;
                i += 1;
            }
            "--dt" => {
                config.delta_time = parse_value(value, "--dt")?;
                i += 1;
            }
            "--script" => {
                config.script = parse_value::<ScriptKind>(value, "--script")?;
                i += 1;
            }
            "--config" => {
                i += 1;
            }
            "--json" => write_json = true,
            "-v" | "--verbose" => config.verbosity = 2,
            "-q" | "--quiet" => config.verbosity = 0,
            "--quick" => config = SimConfig { seed: config.seed, ..SimConfig::quick() },
            "-h" | "--help" => return Ok(None),
            other => bail!("unknown argument `{}` (try --help)", other),
        }
        i += 1;
    }

    config.validate()?;
    Ok(Some((config, write_json)))
}

fn parse_value<T>(value: Option<&String>, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = value.with_context(|| format!("{} needs a value", flag))?;
    raw.parse::<T>()
        .with_context(|| format!("invalid value `{}` for {}", raw, flag))
}

fn print_help() {
    println!("Delve Dungeon Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --seed <S>       Map and gameplay seed (default: 12345)");
    println!("    -t, --ticks <T>      Max ticks to simulate (default: 18,000)");
    println!("    --dt <SECONDS>       Seconds per tick (default: 1/60)");
    println!("    --script <NAME>      idle, patrol or circle (default: patrol)");
    println!("    --config <FILE>      Load settings from a JSON file first");
    println!("    --quick              One simulated minute");
    println!("    --json               Save JSON report");
    println!("    -v, --verbose        Print every tick event");
    println!("    -q, --quiet          Suppress the run summary log");
    println!("    -h, --help           Show this help");
}
