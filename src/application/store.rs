//! Project configuration store
//!
//! Holds the current [`ProjectConfig`] snapshot and applies mutations to it.
//! Each mutation computes the next snapshot from the current one and swaps
//! it in; snapshots handed out earlier stay valid and unchanged.

use std::sync::Arc;

use crate::domain::entities::ProjectConfig;
use crate::domain::ports::IdGenerator;
use crate::domain::value_objects::{DatabaseKind, EntityId, Technology};
use crate::infrastructure::ids::UuidGenerator;

/// Draws allowed before a live id is made unique with a numeric suffix
const MAX_ID_ATTEMPTS: usize = 8;

/// One store operation, replayable against any store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddEnvironment,
    RenameEnvironment { id: EntityId, name: String },
    RemoveEnvironment { id: EntityId },
    AddApplication,
    RenameApplication { id: EntityId, name: String },
    SetApplicationTechnology { id: EntityId, technology: Technology },
    RemoveApplication { id: EntityId },
    AddDatabase,
    RenameDatabase { id: EntityId, name: String },
    SetDatabaseType { id: EntityId, kind: DatabaseKind },
    RemoveDatabase { id: EntityId },
}

/// What a mutation did
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationOutcome {
    /// Id of the entity created by an `Add*` mutation
    pub created: Option<EntityId>,
    /// False when the mutation targeted an id that is not live
    pub changed: bool,
}

/// Owner of the current project snapshot
pub struct ProjectConfigStore<G: IdGenerator = UuidGenerator> {
    current: Arc<ProjectConfig>,
    ids: G,
}

impl ProjectConfigStore<UuidGenerator> {
    /// Empty project with random ids
    pub fn new() -> Self {
        Self::with_generator(UuidGenerator::new())
    }
}

impl Default for ProjectConfigStore<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ProjectConfigStore<G> {
    /// Empty project with a custom id generator
    pub fn with_generator(ids: G) -> Self {
        Self {
            current: Arc::new(ProjectConfig::new()),
            ids,
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<ProjectConfig> {
        Arc::clone(&self.current)
    }

    /// Borrow the current snapshot
    pub fn config(&self) -> &ProjectConfig {
        &self.current
    }

    pub fn add_environment(&mut self) -> EntityId {
        let id = self.fresh_id();
        self.replace(self.current.add_environment(id.clone()));
        id
    }

    pub fn rename_environment(&mut self, id: &EntityId, name: &str) -> bool {
        let found = self.current.environment(id).is_some();
        self.replace(self.current.rename_environment(id, name));
        found
    }

    pub fn remove_environment(&mut self, id: &EntityId) -> bool {
        let found = self.current.environment(id).is_some();
        self.replace(self.current.remove_environment(id));
        found
    }

    pub fn add_application(&mut self) -> EntityId {
        let id = self.fresh_id();
        self.replace(self.current.add_application(id.clone()));
        id
    }

    pub fn rename_application(&mut self, id: &EntityId, name: &str) -> bool {
        let found = self.current.application(id).is_some();
        self.replace(self.current.rename_application(id, name));
        found
    }

    pub fn set_application_technology(&mut self, id: &EntityId, technology: Technology) -> bool {
        let found = self.current.application(id).is_some();
        self.replace(self.current.set_application_technology(id, technology));
        found
    }

    pub fn remove_application(&mut self, id: &EntityId) -> bool {
        let found = self.current.application(id).is_some();
        self.replace(self.current.remove_application(id));
        found
    }

    pub fn add_database(&mut self) -> EntityId {
        let id = self.fresh_id();
        self.replace(self.current.add_database(id.clone()));
        id
    }

    pub fn rename_database(&mut self, id: &EntityId, name: &str) -> bool {
        let found = self.current.database(id).is_some();
        self.replace(self.current.rename_database(id, name));
        found
    }

    pub fn set_database_type(&mut self, id: &EntityId, kind: DatabaseKind) -> bool {
        let found = self.current.database(id).is_some();
        self.replace(self.current.set_database_type(id, kind));
        found
    }

    pub fn remove_database(&mut self, id: &EntityId) -> bool {
        let found = self.current.database(id).is_some();
        self.replace(self.current.remove_database(id));
        found
    }

    /// Apply a single mutation
    pub fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        tracing::debug!(?mutation, "applying project mutation");

        let outcome = match mutation {
            Mutation::AddEnvironment => created(self.add_environment()),
            Mutation::AddApplication => created(self.add_application()),
            Mutation::AddDatabase => created(self.add_database()),
            Mutation::RenameEnvironment { id, name } => changed(self.rename_environment(&id, &name)),
            Mutation::RemoveEnvironment { id } => changed(self.remove_environment(&id)),
            Mutation::RenameApplication { id, name } => changed(self.rename_application(&id, &name)),
            Mutation::SetApplicationTechnology { id, technology } => {
                changed(self.set_application_technology(&id, technology))
            }
            Mutation::RemoveApplication { id } => changed(self.remove_application(&id)),
            Mutation::RenameDatabase { id, name } => changed(self.rename_database(&id, &name)),
            Mutation::SetDatabaseType { id, kind } => changed(self.set_database_type(&id, kind)),
            Mutation::RemoveDatabase { id } => changed(self.remove_database(&id)),
        };

        if !outcome.changed {
            tracing::debug!("mutation target not found; snapshot unchanged");
        }
        outcome
    }

    /// Apply mutations in order, returning each outcome
    pub fn apply_all(&mut self, mutations: impl IntoIterator<Item = Mutation>) -> Vec<MutationOutcome> {
        mutations.into_iter().map(|m| self.apply(m)).collect()
    }

    fn replace(&mut self, next: ProjectConfig) {
        if next != *self.current {
            self.current = Arc::new(next);
        }
    }

    fn fresh_id(&mut self) -> EntityId {
        let mut id = self.ids.next_id();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.current.contains_id(&id) {
                return id;
            }
            tracing::warn!(%id, "generated id already in use; drawing again");
            id = self.ids.next_id();
        }
        if !self.current.contains_id(&id) {
            return id;
        }

        // The generator keeps repeating itself; suffix the last draw.
        let mut n = 2;
        loop {
            let candidate = EntityId::new(format!("{}-{}", id, n));
            if !self.current.contains_id(&candidate) {
                tracing::warn!(%id, %candidate, "id generator exhausted; using suffixed id");
                return candidate;
            }
            n += 1;
        }
    }
}

fn created(id: EntityId) -> MutationOutcome {
    MutationOutcome {
        created: Some(id),
        changed: true,
    }
}

fn changed(found: bool) -> MutationOutcome {
    MutationOutcome {
        created: None,
        changed: found,
    }
}
