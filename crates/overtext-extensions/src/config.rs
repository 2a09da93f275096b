use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use overtext_engine::DecorationProvider;

use crate::banner::{BannerConfig, PageBanner};
use crate::blockstyle::{BlockStyle, BlockStyleConfig};
use crate::search::{SearchConfig, SearchHighlight};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid search pattern `{pattern}`: {source}")]
    InvalidSearchPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Declarative description of the built-in providers to register.
///
/// ```toml
/// [banner]
/// header = "Draft"
///
/// [block_style]
/// attrs = { class = "block" }
///
/// [search]
/// pattern = "TODO"
/// case_insensitive = true
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub banner: Option<BannerConfig>,
    pub block_style: Option<BlockStyleConfig>,
    pub search: Option<SearchConfig>,
}

impl OverlayConfig {
    /// Load a config file, returning `None` if it doesn't exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Build the configured providers in registration (= paint) order:
    /// banner, block style, search.
    pub fn into_providers(self) -> Result<Vec<Box<dyn DecorationProvider>>, ConfigError> {
        let mut providers: Vec<Box<dyn DecorationProvider>> = Vec::new();

        if let Some(banner) = self.banner {
            providers.push(Box::new(PageBanner::new(banner)));
        }
        if let Some(block_style) = self.block_style {
            providers.push(Box::new(BlockStyle::new(block_style)));
        }
        if let Some(search) = self.search {
            let provider = SearchHighlight::new(&search).map_err(|source| {
                ConfigError::InvalidSearchPattern {
                    pattern: search.pattern.clone(),
                    source,
                }
            })?;
            providers.push(Box::new(provider));
        }

        log::debug!("configured {} decoration providers", providers.len());
        Ok(providers)
    }
}
