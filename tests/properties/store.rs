//! Property tests for the project config store.

use std::collections::HashSet;

use proptest::prelude::*;

use gia::{DatabaseKind, EntityId, Mutation, ProjectConfigStore, Technology};

use super::strategies::{build, script};

fn missing_id_mutations(id: &EntityId) -> Vec<Mutation> {
    vec![
        Mutation::RenameEnvironment {
            id: id.clone(),
            name: "x".to_string(),
        },
        Mutation::RemoveEnvironment { id: id.clone() },
        Mutation::RenameApplication {
            id: id.clone(),
            name: "x".to_string(),
        },
        Mutation::SetApplicationTechnology {
            id: id.clone(),
            technology: Technology::from("node"),
        },
        Mutation::RemoveApplication { id: id.clone() },
        Mutation::RenameDatabase {
            id: id.clone(),
            name: "x".to_string(),
        },
        Mutation::SetDatabaseType {
            id: id.clone(),
            kind: DatabaseKind::Mysql,
        },
        Mutation::RemoveDatabase { id: id.clone() },
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Targeting an id that is not live leaves the snapshot deep-equal.
    #[test]
    fn property_missing_id_is_no_op(steps in script()) {
        let mut store = build(&steps);
        let before = store.config().clone();
        let missing = EntityId::new("not-a-live-id");

        for mutation in missing_id_mutations(&missing) {
            let outcome = store.apply(mutation);
            prop_assert!(!outcome.changed);
            prop_assert_eq!(store.config(), &before);
        }
    }

    /// PROPERTY: Live ids are unique across all entity kinds.
    #[test]
    fn property_live_ids_are_unique(steps in script()) {
        let store = build(&steps);
        let config = store.config();

        let ids: Vec<&EntityId> = config
            .environments
            .iter()
            .map(|e| &e.id)
            .chain(config.applications.iter().map(|a| &a.id))
            .chain(config.databases.iter().map(|d| &d.id))
            .collect();
        let distinct: HashSet<&EntityId> = ids.iter().copied().collect();

        prop_assert_eq!(ids.len(), distinct.len());
    }

    /// PROPERTY: N consecutive adds on an empty store yield N distinct ids.
    #[test]
    fn property_uuid_adds_are_distinct(kinds in proptest::collection::vec(0u8..3, 1..60)) {
        let mut store = ProjectConfigStore::new();
        let ids: Vec<EntityId> = kinds
            .iter()
            .map(|k| match k {
                0 => store.add_environment(),
                1 => store.add_application(),
                _ => store.add_database(),
            })
            .collect();
        let distinct: HashSet<&EntityId> = ids.iter().collect();

        prop_assert_eq!(distinct.len(), kinds.len());
    }

    /// PROPERTY: Snapshots taken earlier never change.
    #[test]
    fn property_snapshots_are_immutable(steps in script(), more in script()) {
        let mut store = build(&steps);
        let snapshot = store.snapshot();
        let copy = (*snapshot).clone();

        for step in &more {
            if let Some(mutation) = super::strategies::to_mutation(step, store.config()) {
                store.apply(mutation);
            }
        }

        prop_assert_eq!(&*snapshot, &copy);
    }
}
