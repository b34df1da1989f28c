//! Common test utilities for GIA CLI tests.
//!
//! - `TestEnv`: isolated project and config directories plus a runner for
//!   the `gia` binary

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod env;

pub use env::*;
