//! Compile-and-render pipeline
//!
//! Used by both the `generate` command and the interactive preview.
//!
//! ## Flow
//!
//! 1. Compile the snapshot into a descriptor (domain service)
//! 2. Render the descriptor in the requested format (presentation)
//! 3. Surface overwritten service keys so the caller can warn

use crate::domain::entities::{ComposeDescriptor, ProjectConfig};
use crate::domain::services::compile_with_report;
use crate::presentation::{render, OutputFormat};

/// Rendered descriptor plus what the CLI needs to report about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub descriptor: ComposeDescriptor,
    pub content: String,
    pub format: OutputFormat,
    pub overwritten_services: Vec<String>,
}

impl GeneratedOutput {
    pub fn has_collisions(&self) -> bool {
        !self.overwritten_services.is_empty()
    }
}

/// Compile `config` and render it as `format`
pub fn generate(config: &ProjectConfig, format: OutputFormat) -> GeneratedOutput {
    let compilation = compile_with_report(config);
    let content = render(format, &compilation.descriptor);

    tracing::info!(
        services = compilation.descriptor.service_count(),
        networks = compilation.descriptor.network_names().len(),
        volumes = compilation.descriptor.volume_names().len(),
        format = %format,
        "generated compose descriptor"
    );
    for key in &compilation.overwritten_services {
        tracing::warn!(service = %key, "service key defined more than once; last definition wins");
    }

    GeneratedOutput {
        descriptor: compilation.descriptor,
        content,
        format,
        overwritten_services: compilation.overwritten_services,
    }
}
