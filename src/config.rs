use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::default_config_path;

/// Default history file, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "category/history.md";
/// Default root for the per-category stub tree.
pub const DEFAULT_OUTPUT_DIR: &str = "split_questions_by_category";

/// Splitter configuration, optionally loaded from a `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Markdown history file to read.
    pub input_file: PathBuf,
    /// Directory that receives one subdirectory per category.
    pub output_dir: PathBuf,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SplitterConfig {
    /// Parse a config from TOML text; absent keys keep their defaults.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: SplitterConfig = toml::from_str(data).context("Failed to parse config TOML")?;
        Ok(cfg)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// used when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Ok(path) if path.exists() => path,
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let cfg = Self::from_toml_str(&data)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, input_file: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(input_file) = input_file {
            self.input_file = input_file;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }
}
