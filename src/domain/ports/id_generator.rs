//! IdGenerator port - source of fresh entity identifiers
//!
//! The store asks this trait for a new id on every `add_*` operation. The
//! production implementation lives in `infrastructure::ids`.

use crate::domain::value_objects::EntityId;

/// Produces identifiers for newly created entities
pub trait IdGenerator {
    /// Return a new identifier. Repeated calls should not repeat values.
    fn next_id(&mut self) -> EntityId;
}

/// Deterministic generator producing `id-1`, `id-2`, ...
///
/// Intended for tests and fixtures where stable ids make assertions readable.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EntityId {
        self.counter += 1;
        EntityId::new(format!("id-{}", self.counter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut gen = SequentialIdGenerator::new();
        assert_eq!(gen.next_id().as_str(), "id-1");
        assert_eq!(gen.next_id().as_str(), "id-2");
    }
}
