//! Catalog command - what the interactive builder offers

use anyhow::Result;

use gia::{DatabaseKind, Technology, COMPOSE_VERSION};

use crate::ui::context::UiContext;
use crate::ui::json::{emit, Event};

pub fn cmd_catalog(ui: &UiContext) -> Result<()> {
    let databases: Vec<&str> = DatabaseKind::ALL.iter().map(DatabaseKind::as_str).collect();

    if ui.json {
        emit(&Event::Catalog {
            compose_version: COMPOSE_VERSION,
            technologies: &Technology::KNOWN,
            databases,
        })?;
        return Ok(());
    }

    println!("Technologies:");
    for tech in Technology::KNOWN {
        println!("  {} {}", ui.bullet(), tech);
    }
    println!("\nDatabase types:");
    for db in databases {
        println!("  {} {}", ui.bullet(), db);
    }
    println!("\nCompose format version: {}", COMPOSE_VERSION);
    Ok(())
}
