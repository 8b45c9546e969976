use std::path::{Path, PathBuf};

use crate::cli::commands::InitArgs;
use crate::io::config_io::{self, DEFAULT_CONFIG_FILE};

/// Write the default config template to `-c <path>` or `./inkdash.toml`.
pub fn cmd_init(args: InitArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    config_io::write_template(&path, args.force)?;

    println!("Created {}", path.display());
    println!("Edit [tasks] url to point at your published sheet, then run `inkdash build`.");
    Ok(())
}
