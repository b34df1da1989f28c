//! Random identifier generation
//!
//! Production [`IdGenerator`] backed by UUID v4. Collisions are possible in
//! principle but negligible in practice.

use uuid::Uuid;

use crate::domain::ports::IdGenerator;
use crate::domain::value_objects::EntityId;

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> EntityId {
        EntityId::new(Uuid::new_v4().to_string())
    }
}
