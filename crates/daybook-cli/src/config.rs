use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use daybook_core::stats::{DEFAULT_COMBOS_LIMIT, DEFAULT_LONGEST_LIMIT, DEFAULT_WORDS_LIMIT};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DaybookConfig {
    #[serde(default)]
    pub journal: JournalSection,
    #[serde(default)]
    pub stats: StatsSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JournalSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSection {
    pub words: usize,
    pub longest: usize,
    pub combos: usize,
}

impl Default for StatsSection {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS_LIMIT,
            longest: DEFAULT_LONGEST_LIMIT,
            combos: DEFAULT_COMBOS_LIMIT,
        }
    }
}

impl DaybookConfig {
    pub fn new(journal_path: PathBuf) -> Self {
        Self {
            journal: JournalSection {
                path: Some(journal_path.to_string_lossy().to_string()),
            },
            stats: StatsSection::default(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_journal_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("journal.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DaybookConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &DaybookConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daybook"));
        }
    }
    Ok(home_dir()?.join(".config").join("daybook"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daybook"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("daybook"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
