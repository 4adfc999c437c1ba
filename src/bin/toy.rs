// Pattern 3: Builder - action figures assembled part by part
// Demonstrates a reusable builder that resets after every build.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use creational_patterns::cli::{report_error, DemoArgs};
use creational_patterns::config::DemoConfig;
use creational_patterns::logging::init_logger;
use creational_patterns::toy::{self, make_a_toy};
use creational_patterns::Result;

fn run(args: DemoArgs) -> Result<()> {
    init_logger(args.verbose);
    let config = DemoConfig::load_or_default(args.config.as_deref())?;

    println!("{}", "Pattern 3: Builder".bold());
    println!("==================\n");

    if args.names.is_empty() {
        let stdout = std::io::stdout();
        toy::showcase(&config.toys, &mut stdout.lock())?;
        return Ok(());
    }

    // Named toys are built one by one, each with a fresh builder.
    let toys = args
        .names
        .iter()
        .map(|name| config.toy(name))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    for toy in toys {
        println!("{}", make_a_toy(toy));
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
