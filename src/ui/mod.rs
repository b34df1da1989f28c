//! Terminal output for the `gia` binary: colors, icons, diffs, JSON events.

pub mod context;
pub mod diff;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
