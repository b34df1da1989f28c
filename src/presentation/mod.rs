//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (YAML/JSON) of compiled descriptors
//!
//! ## Structure
//!
//! - `cli` - Argument definitions shared by the binary and its tests
//! - `output` - Descriptor rendering

pub mod cli;
pub mod output;

pub use output::{generate_yaml, render, render_json, render_yaml, OutputFormat};
