use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_CONFIG_FILE: &str = "points_client.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub log_filter: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    log_filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid api base url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientSettings {
    /// Defaults, then the config file, then environment overrides.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        match explicit_path {
            Some(path) => settings.apply_file(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    settings.apply_file(path)?;
                }
            }
        }

        settings.apply_env(|name| std::env::var(name).ok());
        Ok(settings)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), SettingsError> {
        let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.apply_toml(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_toml(&mut self, raw: &str) -> Result<(), toml::de::Error> {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.api_base_url {
            self.api_base_url = v;
        }
        if let Some(v) = file_cfg.log_filter {
            self.log_filter = v;
        }
        Ok(())
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("POINTS_API_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = non_empty("APP__API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = non_empty("RUST_LOG") {
            self.log_filter = v;
        }
    }

    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let invalid = |reason: String| SettingsError::InvalidUrl {
            url: self.api_base_url.clone(),
            reason,
        };
        let url = Url::parse(self.api_base_url.trim()).map_err(|err| invalid(err.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
