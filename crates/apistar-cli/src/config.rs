//! Configuration management for the CLI
//!
//! Settings load from defaults, then a project configuration file
//! (`.apistar.toml` in the working directory, or the path given with
//! `--config` / `APISTAR_CONFIG`). Command-line flags win over both.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-level configuration file.
pub const PROJECT_CONFIG_FILE: &str = ".apistar.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Documentation build settings
    pub docs: DocsConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output by default
    pub color: bool,
}

/// Documentation build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Directory the site is written to
    pub site_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from(apistar_docs::DEFAULT_SITE_DIR),
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicitly provided file.
    ///
    /// An explicit path that does not exist is an error; a missing
    /// project file just means defaults.
    pub fn load_with_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => {
                let project = Path::new(PROJECT_CONFIG_FILE);
                if project.exists() {
                    Self::from_file(project)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| {
            Error::config(format!("failed to parse {}: {}", path.display(), err))
        })
    }
}
