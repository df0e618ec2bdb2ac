use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub surface: SurfaceConfig,
    pub page: PageConfig,
    pub font: FontConfig,
}

/// Labels shown on the changelog surface
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    pub title: String,
    /// Shown as the version when the host supplies none.
    pub fallback_version: String,
    pub close_label: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            title: "What's New".to_string(),
            fallback_version: "0.0.0".to_string(),
            close_label: "Close changelog".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub numbers: bool,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    pub sans: bool,
}

impl Config {
    /// The bundled `default_config.toml`, validated by the build script.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled default if it does not exist.
    ///
    /// Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
