// Pattern 1: Singleton - one antenna, one controller
// Demonstrates guarding a single resource behind an owned registry.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use creational_patterns::antenna::{self, AntennaRegistry};
use creational_patterns::cli::{report_error, DemoArgs};
use creational_patterns::config::DemoConfig;
use creational_patterns::logging::init_logger;
use creational_patterns::Result;

fn run(args: DemoArgs) -> Result<()> {
    init_logger(args.verbose);
    let config = DemoConfig::load_or_default(args.config.as_deref())?;

    let mut rng = match config.antenna.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("{}", "Pattern 1: Singleton".bold());
    println!("====================\n");

    let mut registry = AntennaRegistry::new();
    let stdout = std::io::stdout();
    let antenna = antenna::tutorial(
        &mut registry,
        config.antenna.enforcement(),
        &mut rng,
        &mut stdout.lock(),
    )?;

    println!("\nFinal antenna direction: {}", antenna.borrow().direction());
    registry.release();
    Ok(())
}

fn main() -> ExitCode {
    match run(DemoArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
