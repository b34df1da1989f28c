//! Domain Entities
//!
//! The project description (input) and the compose descriptor (output).

mod descriptor;
mod project;

pub use descriptor::{ComposeDescriptor, NetworkSpec, ServiceSpec, VolumeSpec, COMPOSE_VERSION};
pub use project::{Application, Database, Environment, ProjectConfig};
