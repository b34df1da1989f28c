//! GIA - GitHub Infrastructure Automation
//!
//! GIA lets you describe a small multi-service project (environments,
//! applications, databases) and derives an opinionated docker-compose file
//! from that description.
//!
//! The pieces, in the order data flows through them:
//!
//! - [`ProjectConfigStore`] holds the current [`ProjectConfig`] snapshot and
//!   applies mutations to it
//! - [`compile`] expands a snapshot into a [`ComposeDescriptor`]
//! - [`render_yaml`] / [`render_json`] turn the descriptor into text

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{generate, GeneratedOutput, Mutation, MutationOutcome, ProjectConfigStore};
pub use config::{Config, Verbosity};
pub use domain::entities::{
    Application, ComposeDescriptor, Database, Environment, ProjectConfig, ServiceSpec,
    COMPOSE_VERSION,
};
pub use domain::services::{compile, compile_with_report, Compilation};
pub use domain::value_objects::{DatabaseKind, EntityId, Technology};
pub use error::{GiaError, GiaResult};
pub use presentation::{generate_yaml, render, render_json, render_yaml, OutputFormat};
