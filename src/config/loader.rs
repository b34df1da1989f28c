//! Configuration loading
//!
//! Precedence, highest first:
//! 1. CLI flags (applied by the commands)
//! 2. Environment variables (`GIA_*`)
//! 3. Explicit `--config` file
//! 4. Project config (`./gia.toml`)
//! 5. User config (`<config dir>/gia/config.toml`)
//! 6. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GiaError, GiaResult};
use crate::presentation::OutputFormat;

use super::types::{Config, Verbosity};

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "gia.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line, when the key could be located
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Discovered config file that failed to load and was passed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedConfig {
    pub path: PathBuf,
    pub message: String,
}

/// `GIA_*` variable whose value was not understood and was ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub variable: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    pub skipped: Vec<SkippedConfig>,
    pub env_warnings: Vec<EnvWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GiaResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> GiaResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GiaError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration (files only, then env overrides)
///
/// Problems that do not stop the run are carried in the result so the CLI
/// can report them once its output is set up.
pub fn resolve(cwd: &Path, explicit: Option<&Path>) -> GiaResult<LoadedConfig> {
    resolve_with_env(cwd, explicit, |key| std::env::var(key).ok())
}

pub(crate) fn resolve_with_env(
    cwd: &Path,
    explicit: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
) -> GiaResult<LoadedConfig> {
    let mut loaded = LoadedConfig::default();

    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        loaded.config = config;
        loaded.source = Some(path.to_path_buf());
        loaded.warnings = warnings;
    } else {
        let candidates = [
            Some(cwd.join(PROJECT_CONFIG_FILE)),
            dirs::config_dir().map(|d| d.join("gia").join("config.toml")),
        ];

        for path in candidates.into_iter().flatten() {
            if !path.exists() {
                continue;
            }
            match load_with_warnings(&path) {
                Ok((config, warnings)) => {
                    loaded.config = config;
                    loaded.source = Some(path);
                    loaded.warnings = warnings;
                    break;
                }
                Err(e) => loaded.skipped.push(SkippedConfig {
                    path,
                    message: e.to_string(),
                }),
            }
        }
    }

    let (config, env_warnings) = with_env_overrides_from(loaded.config, get_env);
    loaded.config = config;
    loaded.env_warnings = env_warnings;
    Ok(loaded)
}

/// Apply `GIA_*` overrides, returning the values that were not understood
pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<EnvWarning>) {
    let mut warnings = Vec::new();

    // GIA_OUTPUT_PATH (empty string clears a configured path)
    if let Some(path) = get_env("GIA_OUTPUT_PATH") {
        config.output.path = if path.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        };
    }

    if let Some(format) = get_env("GIA_OUTPUT_FORMAT") {
        match format.trim().to_lowercase().as_str() {
            "yaml" | "yml" => config.output.format = OutputFormat::Yaml,
            "json" => config.output.format = OutputFormat::Json,
            _ => warnings.push(EnvWarning {
                variable: "GIA_OUTPUT_FORMAT",
                value: format,
                expected: "yaml, json",
            }),
        }
    }

    if let Some(verbosity) = get_env("GIA_VERBOSITY") {
        match Verbosity::from_name(&verbosity) {
            Some(v) => config.output.verbosity = v,
            None => warnings.push(EnvWarning {
                variable: "GIA_VERBOSITY",
                value: verbosity,
                expected: "quiet, normal, verbose, debug",
            }),
        }
    }

    (config, warnings)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "path", "format", "verbosity"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn parse_for_test(content: &str) -> GiaResult<(Config, Vec<ConfigWarning>)> {
    parse_with_warnings(content, Path::new("gia.toml"))
}

#[cfg(test)]
pub(super) fn levenshtein_for_test(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}
