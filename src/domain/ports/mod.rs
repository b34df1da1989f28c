//! Domain Ports
//!
//! Traits the domain depends on; implementations live in infrastructure.

mod id_generator;

pub use id_generator::{IdGenerator, SequentialIdGenerator};
