//! Shared proptest strategies: mutation scripts over a store.

use proptest::prelude::*;

use gia::domain::ports::SequentialIdGenerator;
use gia::{DatabaseKind, EntityId, Mutation, ProjectConfig, ProjectConfigStore, Technology};

/// A mutation whose target is chosen by position among live entities
#[derive(Debug, Clone)]
pub enum Step {
    AddEnvironment,
    AddApplication,
    AddDatabase,
    RenameEnvironment(usize, String),
    RemoveEnvironment(usize),
    RenameApplication(usize, String),
    SetTechnology(usize, String),
    RemoveApplication(usize),
    RenameDatabase(usize, String),
    SetDatabaseType(usize, bool),
    RemoveDatabase(usize),
}

/// Names drawn from a tiny pool so collisions and blanks are common
pub fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        Just("prod".to_string()),
        Just(" prod ".to_string()),
        Just("dev".to_string()),
        Just("api".to_string()),
        Just("web".to_string()),
        Just("main".to_string()),
        "[a-z]{1,6}",
    ]
}

pub fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::AddEnvironment),
        3 => Just(Step::AddApplication),
        3 => Just(Step::AddDatabase),
        3 => (any::<usize>(), name()).prop_map(|(i, n)| Step::RenameEnvironment(i, n)),
        1 => any::<usize>().prop_map(Step::RemoveEnvironment),
        3 => (any::<usize>(), name()).prop_map(|(i, n)| Step::RenameApplication(i, n)),
        1 => (any::<usize>(), "[a-z]{0,6}").prop_map(|(i, t)| Step::SetTechnology(i, t)),
        1 => any::<usize>().prop_map(Step::RemoveApplication),
        3 => (any::<usize>(), name()).prop_map(|(i, n)| Step::RenameDatabase(i, n)),
        2 => (any::<usize>(), any::<bool>()).prop_map(|(i, m)| Step::SetDatabaseType(i, m)),
        1 => any::<usize>().prop_map(Step::RemoveDatabase),
    ]
}

pub fn script() -> impl Strategy<Value = Vec<Step>> {
    proptest::collection::vec(step(), 0..40)
}

fn nth_id(ids: &[&EntityId], index: usize) -> Option<EntityId> {
    if ids.is_empty() {
        None
    } else {
        Some(ids[index % ids.len()].clone())
    }
}

/// Translate a step into a concrete mutation against `config`
pub fn to_mutation(step: &Step, config: &ProjectConfig) -> Option<Mutation> {
    let envs: Vec<&EntityId> = config.environments.iter().map(|e| &e.id).collect();
    let apps: Vec<&EntityId> = config.applications.iter().map(|a| &a.id).collect();
    let dbs: Vec<&EntityId> = config.databases.iter().map(|d| &d.id).collect();

    Some(match step {
        Step::AddEnvironment => Mutation::AddEnvironment,
        Step::AddApplication => Mutation::AddApplication,
        Step::AddDatabase => Mutation::AddDatabase,
        Step::RenameEnvironment(i, name) => Mutation::RenameEnvironment {
            id: nth_id(&envs, *i)?,
            name: name.clone(),
        },
        Step::RemoveEnvironment(i) => Mutation::RemoveEnvironment {
            id: nth_id(&envs, *i)?,
        },
        Step::RenameApplication(i, name) => Mutation::RenameApplication {
            id: nth_id(&apps, *i)?,
            name: name.clone(),
        },
        Step::SetTechnology(i, tech) => Mutation::SetApplicationTechnology {
            id: nth_id(&apps, *i)?,
            technology: Technology::new(tech.clone()),
        },
        Step::RemoveApplication(i) => Mutation::RemoveApplication {
            id: nth_id(&apps, *i)?,
        },
        Step::RenameDatabase(i, name) => Mutation::RenameDatabase {
            id: nth_id(&dbs, *i)?,
            name: name.clone(),
        },
        Step::SetDatabaseType(i, mysql) => Mutation::SetDatabaseType {
            id: nth_id(&dbs, *i)?,
            kind: if *mysql {
                DatabaseKind::Mysql
            } else {
                DatabaseKind::Postgres
            },
        },
        Step::RemoveDatabase(i) => Mutation::RemoveDatabase {
            id: nth_id(&dbs, *i)?,
        },
    })
}

/// Replay a script on a fresh store with sequential ids
pub fn build(steps: &[Step]) -> ProjectConfigStore<SequentialIdGenerator> {
    let mut store = ProjectConfigStore::with_generator(SequentialIdGenerator::new());
    for step in steps {
        if let Some(mutation) = to_mutation(step, store.config()) {
            store.apply(mutation);
        }
    }
    store
}
