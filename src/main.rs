use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pod_census::{report::ReportWriter, Experiment, Scenario, ScenarioLoader};

#[derive(Debug, Parser)]
#[command(author, version, about = "Multi-trial dolphin pod population runner")]
struct Cli {
    /// Path to a scenario YAML file (built-in bottlenose pod when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the number of trials
    #[arg(long)]
    trials: Option<usize>,

    /// Override the simulation horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Override the master seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the JSON report to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Run trials one after another instead of on the thread pool
    #[arg(long)]
    sequential: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut scenario = match &cli.scenario {
        Some(path) => ScenarioLoader::new(".")
            .load(path)
            .with_context(|| format!("Failed to load scenario {}", path.display()))?,
        None => Scenario::bottlenose_pod(),
    };
    if let Some(trials) = cli.trials {
        scenario.trials = trials;
    }
    if let Some(years) = cli.years {
        scenario.years = years;
    }
    if let Some(seed) = cli.seed {
        scenario.seed = seed;
    }
    if cli.sequential {
        scenario.parallel = false;
    }
    scenario.validate().context("Invalid scenario")?;

    let names = scenario.name_factory().context("Failed to open name lists")?;
    let config = scenario.experiment_config()?;
    let result = Experiment::new(config, &scenario.founders, names.as_ref())
        .run()
        .with_context(|| format!("Scenario '{}' failed", scenario.name))?;

    println!(
        "Scenario '{}': {} of {} trials completed over {} years",
        scenario.name,
        result.trials_completed(),
        result.trials_requested,
        scenario.years
    );
    println!("{:>6} {:>10} {:>10} {:>10} {:>10}", "year", "mean", "std", "lower", "upper");
    let last = result.years.len().saturating_sub(1);
    for (index, stats) in result.years.iter().enumerate() {
        if index % 25 == 0 || index == last {
            println!(
                "{:>6} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
                stats.year, stats.mean, stats.std_dev, stats.lower, stats.upper
            );
        }
    }
    for trial in &result.trials {
        println!(
            "trial {:>3}: {} living, {} births, {} deaths",
            trial.trial + 1,
            trial.living,
            trial.births,
            trial.deaths
        );
    }
    for failure in &result.failures {
        println!("trial {:>3} skipped: {}", failure.trial + 1, failure.message);
    }

    if let Some(path) = &cli.output {
        let written = ReportWriter::new(path)
            .write(&scenario.name, &result)
            .context("Failed to write report")?;
        println!("Report written to {}", written.display());
    }
    Ok(())
}
