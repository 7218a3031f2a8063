//! # LADRC Simulator Binary
//!
//! Runs the LADRC controller against the point-mass plant and prints one
//! line per tick (target, actual, command, error).
//!
//! # Usage
//!
//! ```bash
//! # Reference demonstration (built-in defaults)
//! ladrc_sim
//!
//! # From a config file, overriding the run length
//! ladrc_sim --config config/ladrc_sim.toml --ticks 2000
//!
//! # JSON lines on stdout, verbose logs on stderr
//! ladrc_sim --json -v
//! ```

use clap::Parser;
use ladrc_common::prelude::LogLevel;
use ladrc_sim::config::SimConfig;
use ladrc_sim::scenario::{Sample, ScenarioRunner};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// LADRC closed-loop simulator
#[derive(Parser, Debug)]
#[command(name = "ladrc_sim")]
#[command(version)]
#[command(about = "Closed-loop LADRC simulation on a damped point-mass plant")]
struct Args {
    /// Path to the simulator TOML config. Built-in defaults when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override scenario.ticks.
    #[arg(long)]
    ticks: Option<usize>,

    /// Override scenario.target.
    #[arg(long, allow_hyphen_values = true)]
    target: Option<f64>,

    /// Override scenario.disturbance.
    #[arg(long, allow_hyphen_values = true)]
    disturbance: Option<f64>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Emit samples and summary as JSON lines; logs go to stderr as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let loaded = load_config(&args);
    let log_level = loaded
        .as_ref()
        .map(|c| c.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, log_level);

    info!("LADRC simulator v{} starting...", env!("CARGO_PKG_VERSION"));

    let result = loaded.and_then(|config| run(&args, &config));
    if let Err(e) = result {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let mut config = match args.config {
        Some(ref path) => SimConfig::load_validated(path)?,
        None => SimConfig::default(),
    };

    if let Some(ticks) = args.ticks {
        config.scenario.ticks = ticks;
    }
    if let Some(target) = args.target {
        config.scenario.target = target;
    }
    if let Some(disturbance) = args.disturbance {
        config.scenario.disturbance = disturbance;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args, config: &SimConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        service = %config.shared.service_name,
        wc = config.controller.wc,
        b0 = config.controller.b0,
        w0 = config.controller.w0,
        h = config.controller.h,
        r = config.controller.r,
        "controller configured"
    );

    let mut runner = ScenarioRunner::new(config)?;
    let mut write_error = None;

    let summary = runner.run(|sample| {
        if write_error.is_some() {
            return;
        }
        if let Err(e) = print_sample(sample, args.json) {
            write_error = Some(e);
        }
    })?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    if args.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!(
            "final_err: {:.6}  max|err|: {:.6}  mean|err|: {:.6}  settle_tick: {}",
            summary.final_error,
            summary.max_abs_error,
            summary.mean_abs_error,
            summary
                .settle_tick
                .map_or_else(|| "-".to_string(), |t| t.to_string()),
        );
    }
    Ok(())
}

fn print_sample(sample: &Sample, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(sample)?);
    } else {
        println!(
            "{}\t target: {:.6}  actual: {:.6}  u: {:.6}  err: {:.6}",
            sample.tick, sample.target, sample.actual, sample.command, sample.error
        );
    }
    Ok(())
}

fn setup_tracing(args: &Args, configured: LogLevel) {
    let directive = if args.verbose {
        LogLevel::Debug.as_directive()
    } else {
        configured.as_directive()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
