//! NDJSON events printed in `--json` mode, one object per line on stdout.

use std::io::{self, Write};

use serde::Serialize;

use gia::{GiaResult, OutputFormat};

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event<'a> {
    /// Compose content printed instead of written
    Generated {
        format: OutputFormat,
        services: usize,
        overwritten: &'a [String],
        content: &'a str,
    },
    /// `--dry-run` result for a target file
    Preview {
        path: String,
        changed: bool,
        overwritten: &'a [String],
    },
    Written {
        path: String,
        services: usize,
        overwritten: &'a [String],
    },
    Catalog {
        compose_version: &'a str,
        technologies: &'a [&'a str],
        databases: Vec<&'a str>,
    },
}

pub fn write_event(out: &mut impl Write, event: &Event<'_>) -> GiaResult<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn emit(event: &Event<'_>) -> GiaResult<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)?;
    out.flush()?;
    Ok(())
}
