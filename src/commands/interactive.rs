//! Interactive builder - the menu-driven way to describe a project
//!
//! Mirrors the web form: add, rename and remove environments, apps and
//! databases, preview the compose file at any point, then save it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use is_terminal::IsTerminal;

use gia::application::{generate, Mutation, ProjectConfigStore};
use gia::config::Config;
use gia::infrastructure::atomic_write;
use gia::{DatabaseKind, EntityId, OutputFormat, ProjectConfig, Technology};

use crate::ui::context::UiContext;
use crate::ui::output::{print_collision_warnings, print_written};

/// Fallback file stem when neither flag nor config names an output path
const DEFAULT_OUTPUT_STEM: &str = "docker-compose";

/// Menu entries; only those that make sense for the snapshot are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddEnvironment,
    AddApplication,
    AddDatabase,
    RenameEnvironment,
    RemoveEnvironment,
    RenameApplication,
    SetTechnology,
    RemoveApplication,
    RenameDatabase,
    SetDatabaseType,
    RemoveDatabase,
    Preview,
    Save,
    Quit,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddEnvironment => "Add environment",
            MenuAction::AddApplication => "Add app",
            MenuAction::AddDatabase => "Add database",
            MenuAction::RenameEnvironment => "Rename environment",
            MenuAction::RemoveEnvironment => "Remove environment",
            MenuAction::RenameApplication => "Rename app",
            MenuAction::SetTechnology => "Set app technology",
            MenuAction::RemoveApplication => "Remove app",
            MenuAction::RenameDatabase => "Rename database",
            MenuAction::SetDatabaseType => "Set database type",
            MenuAction::RemoveDatabase => "Remove database",
            MenuAction::Preview => "Preview compose file",
            MenuAction::Save => "Save and quit",
            MenuAction::Quit => "Quit without saving",
        }
    }
}

pub fn menu_actions(config: &ProjectConfig) -> Vec<MenuAction> {
    let mut actions = vec![
        MenuAction::AddEnvironment,
        MenuAction::AddApplication,
        MenuAction::AddDatabase,
    ];
    if !config.environments.is_empty() {
        actions.extend([MenuAction::RenameEnvironment, MenuAction::RemoveEnvironment]);
    }
    if !config.applications.is_empty() {
        actions.extend([
            MenuAction::RenameApplication,
            MenuAction::SetTechnology,
            MenuAction::RemoveApplication,
        ]);
    }
    if !config.databases.is_empty() {
        actions.extend([
            MenuAction::RenameDatabase,
            MenuAction::SetDatabaseType,
            MenuAction::RemoveDatabase,
        ]);
    }
    actions.extend([MenuAction::Preview, MenuAction::Save, MenuAction::Quit]);
    actions
}

/// One-line project summary shown above the menu
pub fn summary(config: &ProjectConfig) -> String {
    fn names<'a>(items: impl Iterator<Item = &'a str>) -> String {
        let list: Vec<&str> = items
            .map(|n| if n.trim().is_empty() { "(unnamed)" } else { n })
            .collect();
        if list.is_empty() {
            "-".to_string()
        } else {
            list.join(", ")
        }
    }

    format!(
        "envs: {} | apps: {} | databases: {}",
        names(config.environments.iter().map(|e| e.name.as_str())),
        names(config.applications.iter().map(|a| a.name.as_str())),
        names(config.databases.iter().map(|d| d.name.as_str())),
    )
}

/// `docker-compose.<ext>` matching the configured format
pub fn default_output_path(format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", DEFAULT_OUTPUT_STEM, format.extension()))
}

pub fn cmd_interactive(output: Option<PathBuf>, config: &Config, ui: &UiContext) -> Result<()> {
    if ui.json || !std::io::stdin().is_terminal() {
        println!("No command provided.");
        println!("Try: `gia generate --app api --env prod` or `gia --help`");
        return Ok(());
    }

    let output = output
        .or_else(|| config.output.path.clone())
        .unwrap_or_else(|| default_output_path(config.output.format));
    let theme = ColorfulTheme::default();
    let mut store = ProjectConfigStore::new();

    println!("GIA - Generate opinionated docker-compose files for your projects\n");

    loop {
        println!("{}", summary(store.config()));
        let actions = menu_actions(store.config());
        let labels: Vec<&str> = actions.iter().map(MenuAction::label).collect();

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            MenuAction::Preview => preview(store.config(), config, ui),
            MenuAction::Save => return save(store.config(), &output, config, ui, &theme),
            MenuAction::Quit => return Ok(()),
            action => {
                if let Some(mutation) = prompt_mutation(action, store.config(), &theme)? {
                    store.apply(mutation);
                }
            }
        }
    }
}

fn prompt_mutation(
    action: MenuAction,
    config: &ProjectConfig,
    theme: &ColorfulTheme,
) -> Result<Option<Mutation>> {
    let mutation = match action {
        MenuAction::AddEnvironment => Mutation::AddEnvironment,
        MenuAction::AddApplication => Mutation::AddApplication,
        MenuAction::AddDatabase => Mutation::AddDatabase,
        MenuAction::RenameEnvironment => {
            let id = pick_environment(theme, config)?;
            Mutation::RenameEnvironment {
                id,
                name: prompt_name(theme)?,
            }
        }
        MenuAction::RemoveEnvironment => Mutation::RemoveEnvironment {
            id: pick_environment(theme, config)?,
        },
        MenuAction::RenameApplication => {
            let id = pick_application(theme, config)?;
            Mutation::RenameApplication {
                id,
                name: prompt_name(theme)?,
            }
        }
        MenuAction::SetTechnology => {
            let id = pick_application(theme, config)?;
            let labels: Vec<&str> = Technology::KNOWN.to_vec();
            let choice = Select::with_theme(theme)
                .with_prompt("Technology")
                .items(&labels)
                .default(0)
                .interact()?;
            Mutation::SetApplicationTechnology {
                id,
                technology: Technology::new(Technology::KNOWN[choice]),
            }
        }
        MenuAction::RemoveApplication => Mutation::RemoveApplication {
            id: pick_application(theme, config)?,
        },
        MenuAction::RenameDatabase => {
            let id = pick_database(theme, config)?;
            Mutation::RenameDatabase {
                id,
                name: prompt_name(theme)?,
            }
        }
        MenuAction::SetDatabaseType => {
            let id = pick_database(theme, config)?;
            let labels: Vec<&str> = DatabaseKind::ALL.iter().map(DatabaseKind::as_str).collect();
            let choice = Select::with_theme(theme)
                .with_prompt("Database type")
                .items(&labels)
                .default(0)
                .interact()?;
            Mutation::SetDatabaseType {
                id,
                kind: DatabaseKind::ALL[choice],
            }
        }
        MenuAction::RemoveDatabase => Mutation::RemoveDatabase {
            id: pick_database(theme, config)?,
        },
        MenuAction::Preview | MenuAction::Save | MenuAction::Quit => return Ok(None),
    };
    Ok(Some(mutation))
}

fn pick_environment(theme: &ColorfulTheme, config: &ProjectConfig) -> Result<EntityId> {
    let items = config.environments.iter().map(|e| (&e.id, e.name.as_str()));
    pick(theme, "Environment", items)
}

fn pick_application(theme: &ColorfulTheme, config: &ProjectConfig) -> Result<EntityId> {
    let items = config.applications.iter().map(|a| (&a.id, a.name.as_str()));
    pick(theme, "App", items)
}

fn pick_database(theme: &ColorfulTheme, config: &ProjectConfig) -> Result<EntityId> {
    let items = config.databases.iter().map(|d| (&d.id, d.name.as_str()));
    pick(theme, "Database", items)
}

fn pick<'a>(
    theme: &ColorfulTheme,
    kind: &str,
    items: impl Iterator<Item = (&'a EntityId, &'a str)>,
) -> Result<EntityId> {
    let (ids, labels): (Vec<&EntityId>, Vec<String>) = items
        .enumerate()
        .map(|(i, (id, name))| {
            let label = if name.trim().is_empty() {
                format!("#{} (unnamed)", i + 1)
            } else {
                format!("#{} {}", i + 1, name)
            };
            (id, label)
        })
        .unzip();

    let choice = Select::with_theme(theme)
        .with_prompt(kind)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ids[choice].clone())
}

fn prompt_name(theme: &ColorfulTheme) -> Result<String> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Name")
        .allow_empty(true)
        .interact_text()?;
    Ok(name)
}

fn preview(project: &ProjectConfig, config: &Config, ui: &UiContext) {
    let generated = generate(project, config.output.format);
    println!("\n{}", generated.content);
    print_collision_warnings(ui, &generated.overwritten_services);
}

fn save(
    project: &ProjectConfig,
    output: &Path,
    config: &Config,
    ui: &UiContext,
    theme: &ColorfulTheme,
) -> Result<()> {
    if output.exists()
        && !Confirm::with_theme(theme)
            .with_prompt(format!("Overwrite {}?", output.display()))
            .default(false)
            .interact()?
    {
        return Ok(());
    }

    let generated = generate(project, config.output.format);
    print_collision_warnings(ui, &generated.overwritten_services);
    atomic_write(output, generated.content.as_bytes())?;
    print_written(ui, output, generated.descriptor.service_count());
    Ok(())
}
