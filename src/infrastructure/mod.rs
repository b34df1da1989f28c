//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `ids` - UUID-backed identifier generator
//! - `writer` - Atomic writes of generated files

pub mod ids;
pub mod writer;

pub use ids::UuidGenerator;
pub use writer::{atomic_write, read_existing};
