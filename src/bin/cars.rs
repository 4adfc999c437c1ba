// Pattern 2: Abstract Factory - car factories for two markets
// Demonstrates building product families through a factory trait.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use creational_patterns::cars::{self, default_factories};
use creational_patterns::cli::{report_error, DemoArgs};
use creational_patterns::config::DemoConfig;
use creational_patterns::logging::init_logger;
use creational_patterns::Result;

fn run(args: DemoArgs) -> Result<()> {
    init_logger(args.verbose);
    let config = DemoConfig::load_or_default(args.config.as_deref())?;

    println!("{}", "Pattern 2: Abstract Factory".bold());
    println!("===========================\n");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    println!("=== Factory Pattern (Trait Objects) ===");
    cars::client(&default_factories(), &mut out)?;

    let orders = config.orders();
    if !orders.is_empty() {
        println!("=== Factory Pattern (Enums) ===");
        cars::fulfil_orders(&orders, &mut out)?;
    }

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
