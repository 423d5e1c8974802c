use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Page fetched when no URL is given on the command line.
pub const DEFAULT_URL: &str = "http://example.org";

/// Global configuration loaded from `~/.config/webtext/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebtextConfig {
    /// URL loaded when the CLI is run without one.
    #[serde(default = "default_url")]
    pub default_url: String,
    /// Optional TCP connect timeout in seconds (None or 0 = wait indefinitely).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional per-read socket timeout in seconds (None or 0 = wait indefinitely).
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

impl Default for WebtextConfig {
    fn default() -> Self {
        Self {
            default_url: default_url(),
            connect_timeout_secs: None,
            read_timeout_secs: None,
        }
    }
}

impl WebtextConfig {
    /// Fetch options derived from this config; the port is always 80.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: secs_to_timeout(self.connect_timeout_secs),
            read_timeout: secs_to_timeout(self.read_timeout_secs),
            ..FetchOptions::default()
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn secs_to_timeout(secs: Option<u64>) -> Option<Duration> {
    secs.filter(|&s| s > 0).map(Duration::from_secs)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("webtext")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WebtextConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<WebtextConfig> {
    if !path.exists() {
        let default_cfg = WebtextConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: WebtextConfig = toml::from_str(&data)?;
    Ok(cfg)
}
