//! Application layer
//!
//! Orchestrates the domain: the project store and the compile-and-render
//! pipeline used by the CLI.

pub mod pipeline;
pub mod store;

pub use pipeline::{generate, GeneratedOutput};
pub use store::{Mutation, MutationOutcome, ProjectConfigStore};
