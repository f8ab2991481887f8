use std::path::PathBuf;

use tracing::info;

use crate::app::resolve_config_path;
use crate::cli::{Cli, InitArgs};
use crate::config::{default_journal_path, write_config, DaybookConfig};
use crate::errors::CliError;

pub fn handle_init(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::InvalidInput(format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ))
        .into());
    }

    let journal_path = match args.path.as_ref().or(cli.journal.as_ref()) {
        Some(path) => PathBuf::from(path),
        None => default_journal_path()?,
    };
    write_config(&config_path, &DaybookConfig::new(journal_path.clone()))?;
    info!(config = %config_path.display(), journal = %journal_path.display(), "config written");

    if !cli.quiet {
        println!("Wrote config {}", config_path.display());
        println!("Journal file: {}", journal_path.display());
    }
    Ok(())
}
