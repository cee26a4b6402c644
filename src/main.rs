mod catalog_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod plan_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Plan(args) => plan_cmd::run(&cli.config, args),
        Command::Catalog => catalog_cmd::run(),
    }
}
