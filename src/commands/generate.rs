//! Generate command - build a project from flags and emit the compose file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use gia::application::{generate, GeneratedOutput, Mutation, ProjectConfigStore};
use gia::config::Config;
use gia::domain::ports::IdGenerator;
use gia::infrastructure::{atomic_write, read_existing};
use gia::{DatabaseKind, GiaError, GiaResult, OutputFormat, Technology};

use crate::ui::context::UiContext;
use crate::ui::diff::render_compose_diff;
use crate::ui::json::{emit, Event};
use crate::ui::output::{print_collision_warnings, print_written};

/// Project entities requested on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectArgs {
    pub envs: Vec<String>,
    pub apps: Vec<String>,
    pub dbs: Vec<String>,
}

/// Where the generated content goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub dry_run: bool,
    pub stdout: bool,
}

pub fn cmd_generate(
    project: &ProjectArgs,
    options: &GenerateOptions,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let mut store = ProjectConfigStore::new();
    populate(&mut store, project)?;

    let format = options.format.unwrap_or(config.output.format);
    let destination = destination(options, config);
    let generated = generate(store.config(), format);

    if !ui.json {
        print_collision_warnings(ui, &generated.overwritten_services);
    }

    match destination {
        Destination::Stdout => emit_stdout(&generated, ui),
        Destination::File(path) if options.dry_run => preview(&path, &generated, ui),
        Destination::File(path) => write(&path, &generated, ui),
    }
}

/// Apply the requested entities to `store` through its mutations
pub fn populate<G: IdGenerator>(store: &mut ProjectConfigStore<G>, project: &ProjectArgs) -> GiaResult<()> {
    for name in &project.envs {
        if let Some(id) = store.apply(Mutation::AddEnvironment).created {
            store.apply(Mutation::RenameEnvironment {
                id,
                name: name.clone(),
            });
        }
    }

    for raw in &project.apps {
        let (name, technology) = parse_app_spec(raw);
        if let Some(id) = store.apply(Mutation::AddApplication).created {
            store.apply(Mutation::RenameApplication {
                id: id.clone(),
                name,
            });
            if let Some(technology) = technology {
                if !technology.is_known() {
                    tracing::info!(%technology, "technology not in the catalogue; accepted as-is");
                }
                store.apply(Mutation::SetApplicationTechnology { id, technology });
            }
        }
    }

    for raw in &project.dbs {
        let (name, kind) = parse_db_spec(raw)?;
        if let Some(id) = store.apply(Mutation::AddDatabase).created {
            store.apply(Mutation::RenameDatabase {
                id: id.clone(),
                name,
            });
            store.apply(Mutation::SetDatabaseType { id, kind });
        }
    }

    Ok(())
}

/// `NAME` or `NAME:TECH`; any technology string is accepted
pub fn parse_app_spec(raw: &str) -> (String, Option<Technology>) {
    match raw.split_once(':') {
        Some((name, tech)) if !tech.trim().is_empty() => {
            (name.to_string(), Some(Technology::new(tech.trim())))
        }
        Some((name, _)) => (name.to_string(), None),
        None => (raw.to_string(), None),
    }
}

/// `NAME` or `NAME:TYPE`; TYPE must be a supported database
pub fn parse_db_spec(raw: &str) -> GiaResult<(String, DatabaseKind)> {
    match raw.split_once(':') {
        Some((name, kind)) => {
            let kind = kind
                .parse::<DatabaseKind>()
                .map_err(|message| GiaError::InvalidArgument {
                    argument: format!("--db '{}'", raw),
                    message,
                })?;
            Ok((name.to_string(), kind))
        }
        None => Ok((raw.to_string(), DatabaseKind::default())),
    }
}

pub fn destination(options: &GenerateOptions, config: &Config) -> Destination {
    if options.stdout {
        return Destination::Stdout;
    }
    match options.output.as_ref().or(config.output.path.as_ref()) {
        Some(path) if path.as_os_str() == "-" => Destination::Stdout,
        Some(path) => Destination::File(path.clone()),
        None => Destination::Stdout,
    }
}

fn emit_stdout(generated: &GeneratedOutput, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit(&Event::Generated {
            format: generated.format,
            services: generated.descriptor.service_count(),
            overwritten: &generated.overwritten_services,
            content: &generated.content,
        })?;
    } else {
        print!("{}", generated.content);
    }
    Ok(())
}

fn preview(path: &Path, generated: &GeneratedOutput, ui: &UiContext) -> Result<()> {
    let existing = read_existing(path).with_context(|| format!("failed to read {}", path.display()))?;
    let changed = existing.as_deref() != Some(generated.content.as_str());

    if ui.json {
        emit(&Event::Preview {
            path: path.display().to_string(),
            changed,
            overwritten: &generated.overwritten_services,
        })?;
        return Ok(());
    }

    if !changed {
        println!("No changes to {}", path.display());
        return Ok(());
    }

    print!(
        "{}",
        render_compose_diff(ui, path, existing.as_deref(), &generated.content)
    );
    Ok(())
}

fn write(path: &Path, generated: &GeneratedOutput, ui: &UiContext) -> Result<()> {
    atomic_write(path, generated.content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;

    if ui.json {
        emit(&Event::Written {
            path: path.display().to_string(),
            services: generated.descriptor.service_count(),
            overwritten: &generated.overwritten_services,
        })?;
    } else {
        print_written(ui, path, generated.descriptor.service_count());
    }
    Ok(())
}
