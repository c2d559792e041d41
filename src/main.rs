//! Run the admission pipeline over a job file and print completion lines.
//!
//! Usage: `admission_pipeline <jobs-file> [--config <config.json>]`
//!
//! Each completed job prints one line, `<id> <type> <processor>`, to stdout.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::fs;
use std::io::BufReader;

use anyhow::{bail, Context};
use tracing::info;

use admission_pipeline::builders::build_pipeline;
use admission_pipeline::config::SimulationConfig;
use admission_pipeline::core::AppResult;
use admission_pipeline::infra::{load_jobs, StdoutSink};
use admission_pipeline::util::init_tracing;

fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let (jobs_path, config_path) = parse_args()?;

    let config = match config_path {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            SimulationConfig::from_json_str(&raw)
                .map_err(|e| anyhow::anyhow!("config file {path}: {e}"))?
        }
        None => SimulationConfig::default(),
    };

    let pipeline = build_pipeline(config, StdoutSink)?;

    let file = fs::File::open(&jobs_path)
        .with_context(|| format!("opening jobs file {jobs_path}"))?;
    let stats = load_jobs(&pipeline, BufReader::new(file))?;

    pipeline.run();

    info!(
        loaded = stats.total_jobs,
        completed = pipeline.ledger().total_completed(),
        "simulation finished"
    );
    Ok(())
}

/// Parse `<jobs-file> [--config <path>]` from the command line.
fn parse_args() -> AppResult<(String, Option<String>)> {
    let mut jobs_path = None;
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = args.next() else {
                    bail!("--config requires a path argument");
                };
                config_path = Some(path);
            }
            _ if jobs_path.is_none() => jobs_path = Some(arg),
            _ => bail!("unexpected argument: {arg}"),
        }
    }

    let Some(jobs_path) = jobs_path else {
        bail!("usage: admission_pipeline <jobs-file> [--config <config.json>]");
    };
    Ok((jobs_path, config_path))
}
