//! Path resolution and journal opening for the Daybook CLI.

use std::path::PathBuf;

use tracing::debug;

use daybook_core::{FileBackend, Journal};

use crate::cli::Cli;
use crate::config::{default_config_path, default_journal_path, read_config, DaybookConfig};

/// Resolve the config file path, checking DAYBOOK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DAYBOOK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when none exists.
pub fn load_config() -> anyhow::Result<DaybookConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(DaybookConfig::default());
    }
    read_config(&path)
}

/// Resolve the journal file: flag or env, then config, then the XDG data dir.
pub fn resolve_journal_path(cli: &Cli, config: &DaybookConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.journal.as_ref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.journal.path.as_ref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_journal_path()
}

/// Open the journal named by the CLI and config.
///
/// A journal that cannot be parsed stops the command here; it is never
/// replaced with an empty one.
pub fn open_journal(cli: &Cli, config: &DaybookConfig) -> anyhow::Result<Journal<FileBackend>> {
    let path = resolve_journal_path(cli, config)?;
    debug!(path = %path.display(), "opening journal");
    Ok(Journal::load(FileBackend::new(path))?)
}
