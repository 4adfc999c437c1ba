use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::error::DemoError;

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(about = "Runs one of the creational pattern demos")]
pub struct DemoArgs {
    #[arg(long, short, help = "TOML file overriding the built-in demo values")]
    pub config: Option<PathBuf>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    /// Items to pick by name, for demos that support it.
    pub names: Vec<String>,
}

pub fn report_error(err: &DemoError) {
    eprintln!("{} {}", "error:".bold().red(), err);
}
