use std::fs;
use std::path::Path;

use crate::strings::Locale;

/// Environment variable the terminal front end reads a config path from.
pub const CONFIG_ENV: &str = "CHEMFORMULA_CONFIG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Front-end settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: Locale,
    pub theme: Theme,
    /// Where the browser fetches the element table from.
    pub elements_url: String,
    /// Where the browser fetches the compound list from.
    pub compounds_url: String,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            theme: Theme::default(),
            elements_url: "data/periodic-table.json".to_string(),
            compounds_url: "data/compounds.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {source}")]
    ParseError { source: serde_json::Error },
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::ParseError { source })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&contents)
    }

    /// Unrecognised names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!("unknown log level {:?}, using info", self.log_level);
            log::LevelFilter::Info
        })
    }
}
