use anyhow::{Context, Result};
use aquasim_core::calibration::run_scenario;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

mod config;
mod plotting;
mod scenarios;

/// Calibration harness CLI: runs the planted-aquarium engine through a
/// scripted scenario, writes a CSV trace, and optionally charts the run.
/// This is the out-of-scope host re-expressed as a thin systems-language
/// adapter (§1 ambient stack) — every domain decision lives in
/// `aquasim-core`, not here.
#[derive(Parser)]
#[command(name = "aquasim", version, about)]
struct Cli {
    /// Path to a tunable-constant override sheet (YAML). Falls back to
    /// published defaults when omitted or missing.
    #[arg(long, global = true)]
    tunables: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every built-in scenario name.
    List,
    /// Run one built-in scenario, writing a trace and charts under ./data/runs.
    Run {
        name: String,
        /// Skip chart generation.
        #[arg(long)]
        no_plots: bool,
    },
    /// Run every built-in scenario in sequence, stopping at the first failure.
    RunAll,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let tunables_path = cli.tunables.unwrap_or_else(|| PathBuf::from("tunables.yaml"));
    let tunables = config::load_tunables(&tunables_path)?;

    match cli.command {
        Command::List => {
            for scenario in scenarios::all() {
                println!("{}", scenario.name);
            }
            Ok(())
        }
        Command::Run { name, no_plots } => run_one(&name, &tunables, !no_plots),
        Command::RunAll => {
            for scenario in scenarios::all() {
                run_one(scenario.name, &tunables, true)?;
            }
            Ok(())
        }
    }
}

fn run_one(name: &str, tunables: &aquasim_schemas::tunables::TunableConfig, plot: bool) -> Result<()> {
    let scenario = scenarios::by_name(name)
        .with_context(|| format!("unknown scenario '{name}'"))?;

    println!("--- running scenario '{}' ---", scenario.name);

    let output_dir = format!(
        "./data/runs/{}_{}",
        scenario.name,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory: {output_dir}"))?;

    let trace_path = format!("{output_dir}/trace.csv");
    let mut trace = aquasim_core::logger::TraceLogger::new(&trace_path)
        .with_context(|| format!("failed to open trace file: {trace_path}"))?;

    let outcome = run_scenario(&scenario.config, tunables, scenario.steps, Some(&mut trace))
        .with_context(|| format!("scenario '{}' failed", scenario.name))?;

    println!(
        "scenario '{}' passed {} assertion(s) over {} tick(s)",
        scenario.name, outcome.assertions_checked, outcome.final_snapshot.tick
    );

    if plot {
        plotting::generate_all_plots(&output_dir, &outcome.history)
            .with_context(|| format!("failed to plot scenario '{}'", scenario.name))?;
    }

    Ok(())
}
