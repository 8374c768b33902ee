//! PCF Host Harness
//!
//! Replay control scenarios without a host shell.
//!
//! Usage:
//!   pcf-harness run scenarios/*.toml     # Run scenario files
//!   pcf-harness run --json a.toml        # Print reports as JSON
//!   pcf-harness manifest resize_button   # Print a bundled manifest
//!   pcf-harness list                     # List bundled controls

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use pcf_controls::manifests::BUNDLED;
use pcf_controls::bundled_manifest;
use pcf_harness::{Scenario, ScenarioReport, ScenarioRunner};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pcf-harness")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless host harness for embeddable controls", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay scenario files
    Run {
        /// Scenario files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Stop each scenario at its first failing tick
        #[arg(long)]
        fail_fast: bool,

        /// Print reports as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a bundled control manifest
    Manifest {
        /// Control name (see `list`)
        name: String,
    },

    /// List bundled controls
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Run {
            files,
            fail_fast,
            json,
        } => cmd_run(&files, fail_fast, json),
        Commands::Manifest { name } => {
            let manifest = bundled_manifest(&name)?;
            print!("{}", manifest.to_toml()?);
            Ok(())
        }
        Commands::List => {
            for name in BUNDLED {
                let manifest = bundled_manifest(name)?;
                println!("{name:<16} {}", manifest.title());
            }
            Ok(())
        }
    }
}

fn cmd_run(files: &[PathBuf], fail_fast: bool, json: bool) -> Result<()> {
    let runner = ScenarioRunner::new().fail_fast(fail_fast);
    let mut reports = Vec::with_capacity(files.len());

    for path in files {
        let scenario = Scenario::load(path)?;
        let report = runner.run(&scenario)?;
        info!(
            scenario = %report.name,
            passed = report.passed(),
            notifications = report.notifications,
            "scenario finished"
        );
        reports.push(report);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_summary(&reports);
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        bail!("{failed} of {} scenarios failed", reports.len());
    }
    Ok(())
}

fn print_summary(reports: &[ScenarioReport]) {
    for report in reports {
        let status = if report.passed() { "ok" } else { "FAILED" };
        println!(
            "{status:<6} {} ({} ticks, {} notifications)",
            report.name, report.ticks, report.notifications
        );
        for failure in &report.failures {
            println!("       tick {}: {}", failure.tick, failure.message);
        }
    }
}
