use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const TOKEN_ENV_VAR: &str = "OMNIBAR_ACCESS_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub access_token: Option<String>,
    pub theme: PaletteType,
    pub search: SearchSettings,
    pub overlay: OverlaySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            access_token: None,
            theme: PaletteType::Nord,
            search: SearchSettings::default(),
            overlay: OverlaySettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub result_limit: usize,
    pub request_timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 2,
            result_limit: 10,
            request_timeout_secs: 15,
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub reposition_interval_ms: u64,
    /// Rows between the bottom edge of the input and the panel.
    pub gap: u16,
    pub width: u16,
    pub max_height: u16,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            reposition_interval_ms: 100,
            gap: 1,
            width: 72,
            max_height: 24,
        }
    }
}

impl OverlaySettings {
    pub fn reposition_interval(&self) -> Duration {
        Duration::from_millis(self.reposition_interval_ms.max(1))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("omnibar");
        path
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

pub fn default_log_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("omnibar.log"))
}

impl Config {
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Malformed config {}", path.display()))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match default_config_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Command-line flags win over the environment, which wins over the file.
    pub fn apply_overrides(
        &mut self,
        api_url: Option<String>,
        token: Option<String>,
        env_token: Option<String>,
    ) {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        if let Some(token) = token.or(env_token) {
            self.access_token = Some(token);
        }
    }
}
