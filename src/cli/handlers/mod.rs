mod init;
pub use init::cmd_init;

use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::fetch::{self, Fetcher};
use crate::io::output::write_page;
use crate::model::config::DashboardConfig;
use crate::model::task::CategoryBucket;
use crate::ops::dashboard;
use crate::render::render_page;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config_path = cli.config.as_deref();

    match cli.command {
        // No subcommand → build
        None => cmd_build(BuildArgs::default(), config_path),
        Some(Commands::Build(args)) => cmd_build(args, config_path),
        Some(Commands::Init(args)) => cmd_init(args, config_path),
        Some(Commands::Tasks) => cmd_tasks(config_path, json),
        Some(Commands::Clock) => cmd_clock(config_path, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load(config_path: Option<&Path>) -> Result<(DashboardConfig, Fetcher), Box<dyn std::error::Error>> {
    let config = config_io::load_config(config_path)?;
    let fetcher = Fetcher::new(&config.user_agent)?;
    Ok((config, fetcher))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_build(args: BuildArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (config, fetcher) = load(config_path)?;
    let dash = dashboard::collect(&config, &fetcher, Utc::now());
    let html = render_page(&dash);

    let path = args.output.unwrap_or_else(|| config.output.clone());
    write_page(&path, &html)?;
    info!(path = %path.display(), bytes = html.len(), "page written");
    println!("Wrote {}", path.display());
    Ok(())
}

fn cmd_tasks(config_path: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (config, fetcher) = load(config_path)?;
    let bucket = fetch::fetch_tasks(&fetcher, &config.tasks, &config.categories);

    if json {
        println!("{}", serde_json::to_string_pretty(&bucket)?);
    } else {
        for line in format_bucket(&bucket, &config.categories) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_clock(config_path: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(config_path)?;
    let tasks = CategoryBucket::empty(config.category_keys());
    let dash = dashboard::assemble(&config, tasks, config.weather.placeholder.clone(), Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&clock_to_json(&dash))?);
    } else {
        for line in format_clock(&dash) {
            println!("{}", line);
        }
    }
    Ok(())
}
