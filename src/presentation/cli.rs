//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Running without a subcommand starts the interactive builder

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::output::OutputFormat;

/// GIA - generate opinionated docker-compose files for your projects
#[derive(Parser, Debug)]
#[command(name = "gia")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'gia' without arguments to build a project interactively.")]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit config file (overrides ./gia.toml and the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a compose file from environments, apps and databases
    Generate {
        /// Environment name (repeatable)
        #[arg(short, long = "env", value_name = "NAME")]
        envs: Vec<String>,

        /// Application as NAME or NAME:TECH (repeatable)
        #[arg(short, long = "app", value_name = "NAME[:TECH]")]
        apps: Vec<String>,

        /// Database as NAME or NAME:TYPE, TYPE is postgres or mysql (repeatable)
        #[arg(short, long = "db", value_name = "NAME[:TYPE]")]
        dbs: Vec<String>,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Show the diff against the existing output file without writing
        #[arg(long)]
        dry_run: bool,

        /// Print to stdout even when an output path is configured
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Build a project step by step and preview the compose file
    Interactive {
        /// File the builder saves to
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List the technologies and database types GIA knows about
    Catalog,
}
