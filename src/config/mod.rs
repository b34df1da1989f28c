//! Configuration module for GIA
//!
//! Settings live in TOML (`./gia.toml` or the user config directory) and
//! can be overridden through `GIA_*` environment variables and CLI flags.

mod loader;
mod types;

pub use loader::{ConfigWarning, EnvWarning, LoadedConfig, SkippedConfig, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, Verbosity};
