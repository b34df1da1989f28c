//! GIA CLI - generate opinionated docker-compose files
//!
//! Usage: gia [COMMAND]
//!
//! Commands:
//!   generate     Build a project from flags and emit the compose file
//!   interactive  Build a project step by step (default)
//!   catalog      List known technologies and database types

use anyhow::{Context, Result};
use clap::Parser;

use gia::config::Config;
use gia::logging::init_logging;
use gia::presentation::cli::{Cli, Commands};

mod commands;
mod ui;

use commands::generate::{GenerateOptions, ProjectArgs};
use ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    let loaded = Config::resolve(&cwd, cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load config {}", path.display()),
        None => "failed to load config".to_string(),
    })?;
    init_logging(cli.verbose, loaded.config.output.verbosity);

    let ui = UiContext::new(cli.json);
    if ui.json {
        for skipped in &loaded.skipped {
            tracing::warn!(path = %skipped.path.display(), error = %skipped.message, "ignoring unreadable config");
        }
        for w in &loaded.env_warnings {
            tracing::warn!(variable = w.variable, value = %w.value, "ignoring unknown value");
        }
    } else {
        ui::output::print_skipped_configs(&ui, &loaded.skipped);
        ui::output::print_env_warnings(&ui, &loaded.env_warnings);
        if let Some(source) = &loaded.source {
            ui::output::print_config_warnings(&ui, source, &loaded.warnings);
        }
    }
    tracing::debug!(source = ?loaded.source, "configuration resolved");

    match cli.command {
        Some(Commands::Generate {
            envs,
            apps,
            dbs,
            output,
            format,
            dry_run,
            stdout,
        }) => commands::generate::cmd_generate(
            &ProjectArgs { envs, apps, dbs },
            &GenerateOptions {
                output,
                format,
                dry_run,
                stdout,
            },
            &loaded.config,
            &ui,
        ),
        Some(Commands::Interactive { output }) => {
            commands::interactive::cmd_interactive(output, &loaded.config, &ui)
        }
        Some(Commands::Catalog) => commands::catalog::cmd_catalog(&ui),
        None => commands::interactive::cmd_interactive(None, &loaded.config, &ui),
    }
}
