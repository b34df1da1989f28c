//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod database_kind;
mod entity_id;
mod technology;

pub use database_kind::DatabaseKind;
pub use entity_id::EntityId;
pub use technology::Technology;
