//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GiaResult;
use crate::presentation::OutputFormat;

use super::loader::{self, LoadedConfig};

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default destination for `gia generate` (stdout when unset)
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a verbosity name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Resolve the effective configuration for a working directory
    ///
    /// An explicit path must load; discovered files that fail are skipped
    /// and listed in [`LoadedConfig::skipped`].
    pub fn resolve(cwd: &Path, explicit: Option<&Path>) -> GiaResult<LoadedConfig> {
        loader::resolve(cwd, explicit)
    }
}
