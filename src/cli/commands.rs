use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "inkdash", about = concat!("inkdash v", env!("CARGO_PKG_VERSION"), " - tasks, clocks and weather on one static page"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ./inkdash.toml if it exists)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch sources and write the dashboard page (default)
    Build(BuildArgs),
    /// Write a commented config file with the defaults
    Init(InitArgs),
    /// Fetch and print tasks by category
    Tasks,
    /// Print the zone clocks, date and day progress
    Clock,
}

#[derive(Args, Default)]
pub struct BuildArgs {
    /// Write the page here instead of the configured output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}
