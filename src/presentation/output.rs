//! Output Rendering
//!
//! Turns a [`ComposeDescriptor`] into text. Rendering is a pure function of
//! the descriptor: the same value always produces byte-identical output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ComposeDescriptor, ProjectConfig};
use crate::domain::services::compile;

/// Output format for rendered descriptors
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// docker-compose YAML
    #[default]
    Yaml,
    /// Pretty-printed JSON (same structure)
    Json,
}

impl OutputFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yml",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => f.write_str("yaml"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Render a descriptor in the given format
pub fn render(format: OutputFormat, descriptor: &ComposeDescriptor) -> String {
    match format {
        OutputFormat::Yaml => render_yaml(descriptor),
        OutputFormat::Json => render_json(descriptor),
    }
}

/// Render a descriptor as YAML
///
/// Descriptors hold only strings, integers, sequences and string-keyed maps,
/// all of which YAML can represent, so serialization cannot fail.
pub fn render_yaml(descriptor: &ComposeDescriptor) -> String {
    serde_yaml_ng::to_string(descriptor).expect("compose descriptor is always representable as YAML")
}

/// Render a descriptor as pretty JSON, newline-terminated
pub fn render_json(descriptor: &ComposeDescriptor) -> String {
    let mut out = serde_json::to_string_pretty(descriptor)
        .expect("compose descriptor is always representable as JSON");
    out.push('\n');
    out
}

/// Compile a snapshot and render it as YAML
pub fn generate_yaml(config: &ProjectConfig) -> String {
    render_yaml(&compile(config))
}
