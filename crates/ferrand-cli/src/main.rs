#![doc = include_str!("../README.md")]

mod config;
mod host;
mod invocation;
mod telemetry;

use anyhow::bail;
use clap::Parser;
use config::{CliArgs, Config};
use ferrand::{Registry, SharedRandom, SystemClock};
use std::io::{self, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry()?;

    let rng = match config.seed {
        Some(seed) => SharedRandom::from_seed(seed),
        None => SharedRandom::new(),
    };
    let registry = Registry::with_defaults(rng, SystemClock);

    let mut stdout = io::stdout().lock();
    if config.list {
        print_usage(&mut stdout, &registry)?;
    }

    if config.invocations.is_empty() {
        return Ok(());
    }

    tracing::info!(
        invocations = config.invocations.len(),
        count = config.count,
        workers = config.workers,
        seed = ?config.seed,
        "evaluating"
    );

    let mut failures = 0usize;
    for evaluation in host::run(&config, &registry) {
        match evaluation.failure() {
            None => {
                if let Ok(value) = &evaluation.result {
                    writeln!(stdout, "{value}")?;
                }
            }
            Some(line) => {
                failures += 1;
                eprintln!("{line}");
            }
        }
    }
    stdout.flush()?;

    if failures > 0 {
        bail!("{failures} evaluation(s) failed");
    }
    Ok(())
}

fn print_usage(out: &mut impl Write, registry: &Registry) -> io::Result<()> {
    for function in registry.iter() {
        writeln!(out, "{}", function.key())?;
        for line in function.usage() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}
