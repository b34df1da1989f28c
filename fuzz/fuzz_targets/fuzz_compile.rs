#![no_main]

use gia::domain::ports::SequentialIdGenerator;
use gia::{render_json, render_yaml, DatabaseKind, EntityId, Mutation, ProjectConfigStore, Technology};
use libfuzzer_sys::fuzz_target;

const NAMES: &[&str] = &["", " ", "api", "web", "prod", "dev", "main", "a b", "x:y"];

// Each input byte pair drives one mutation against the most recent ids.
fuzz_target!(|data: &[u8]| {
    let mut store = ProjectConfigStore::with_generator(SequentialIdGenerator::new());
    let mut ids: Vec<EntityId> = Vec::new();

    for pair in data.chunks(2) {
        let op = pair[0] % 11;
        let arg = pair.get(1).copied().unwrap_or(0) as usize;
        let id = ids
            .get(arg % ids.len().max(1))
            .cloned()
            .unwrap_or_else(|| EntityId::from("missing"));
        let name = NAMES[arg % NAMES.len()].to_string();

        let mutation = match op {
            0 => Mutation::AddEnvironment,
            1 => Mutation::RenameEnvironment { id, name },
            2 => Mutation::RemoveEnvironment { id },
            3 => Mutation::AddApplication,
            4 => Mutation::RenameApplication { id, name },
            5 => Mutation::SetApplicationTechnology {
                id,
                technology: Technology::new(name),
            },
            6 => Mutation::RemoveApplication { id },
            7 => Mutation::AddDatabase,
            8 => Mutation::RenameDatabase { id, name },
            9 => Mutation::SetDatabaseType {
                id,
                kind: DatabaseKind::ALL[arg % DatabaseKind::ALL.len()],
            },
            _ => Mutation::RemoveDatabase { id },
        };

        if let Some(created) = store.apply(mutation).created {
            ids.push(created);
        }
    }

    let descriptor = gia::compile(store.config());
    let _ = render_yaml(&descriptor);
    let _ = render_json(&descriptor);
});
