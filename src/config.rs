use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory holding the event and cursor slots
    #[serde(default)]
    pub data_dir: Option<String>,

    /// What to do when the stored events cannot be read
    #[serde(default)]
    pub on_corrupt: OnCorrupt,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnCorrupt {
    /// Refuse to start until the file is fixed
    #[default]
    Fail,
    /// Start over with an empty calendar
    Reset,
}

impl Config {
    /// Resolved data directory (~/.local/share/monthcal on Linux by default)
    pub fn data_path(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(expand_path(dir)),
            None => Ok(dirs::data_dir()
                .context("Could not determine data directory")?
                .join("monthcal")),
        }
    }
}

/// Get the config directory path (~/.config/monthcal)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("monthcal");
    Ok(config_dir)
}

/// Get the config file path (~/.config/monthcal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from `path`, or ~/.config/monthcal/config.toml.
/// A missing file means all defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
