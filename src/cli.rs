use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Demeter turfgrass irrigation planner.
#[derive(Parser)]
#[command(name = "demeter", version, about = "Turfgrass irrigation planner")]
pub struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "demeter.toml")]
    pub config: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Plan irrigation schedules from a weather forecast.
    Plan(PlanArgs),
    /// Print the built-in grass and soil catalogues.
    Catalog,
}

/// Arguments for the `plan` subcommand.
#[derive(Args)]
pub struct PlanArgs {
    /// Override forecast JSON path from config.
    #[arg(short, long)]
    pub weather: Option<PathBuf>,

    /// Override report output path from config (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Restrict planning to a single zone id.
    #[arg(short, long)]
    pub zone: Option<String>,
}
