//! Domain layer
//!
//! Pure project model and the descriptor compiler. Nothing in here performs
//! I/O or holds shared state.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
