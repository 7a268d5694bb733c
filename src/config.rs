use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "Config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub ansi_colors: bool,
    pub unicode_glyphs: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Reads `path` if it exists (defaults otherwise), then applies
    /// `LAYERCHESS_*` environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Self::parse(&contents)?
        } else {
            Self::default()
        };

        config.merge_env();
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn log_summary(&self) {
        tracing::info!(
            ansi_colors = self.display.ansi_colors,
            unicode_glyphs = self.display.unicode_glyphs,
            log_level = %self.logging.level,
            "layerchess configuration"
        );
    }

    fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("LAYERCHESS_DISPLAY_ANSI_COLORS") {
            if let Ok(parsed) = val.parse() {
                self.display.ansi_colors = parsed;
            }
        }
        if let Ok(val) = std::env::var("LAYERCHESS_DISPLAY_UNICODE_GLYPHS") {
            if let Ok(parsed) = val.parse() {
                self.display.unicode_glyphs = parsed;
            }
        }
        if let Ok(val) = std::env::var("LAYERCHESS_LOG_LEVEL") {
            if !val.trim().is_empty() {
                self.logging.level = val.trim().to_string();
            }
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ansi_colors: true,
            unicode_glyphs: true,
        }
    }
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
