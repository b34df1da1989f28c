//! Descriptor Compiler
//!
//! Expands a [`ProjectConfig`] snapshot into a [`ComposeDescriptor`].
//!
//! ## Rules
//!
//! - No applications: the skeleton descriptor (version only), even when
//!   environments or databases exist.
//! - Applications and databases whose trimmed name is empty are skipped.
//! - With at least one named environment, every application and database is
//!   fanned out per environment (`<name>_<env>`) onto `internal_<env>`.
//!   Without environments each gets a single `<name>-service`.
//! - Every database gets a `<name>_data` volume.
//! - `services`, `networks` and `volumes` are omitted when empty.
//!
//! Keys collide when names repeat. The later write wins and keeps the
//! earlier key's position; `compile_with_report` lists such keys.

use indexmap::IndexMap;

use crate::domain::entities::{
    ComposeDescriptor, NetworkSpec, ProjectConfig, ServiceSpec, VolumeSpec, COMPOSE_VERSION,
};
use crate::domain::value_objects::DatabaseKind;

const RESTART_POLICY: &str = "unless-stopped";

/// Result of a compilation with diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub descriptor: ComposeDescriptor,
    /// Service keys written more than once, in first-collision order
    pub overwritten_services: Vec<String>,
}

/// Compile a project snapshot into a compose descriptor
pub fn compile(config: &ProjectConfig) -> ComposeDescriptor {
    compile_with_report(config).descriptor
}

/// Compile and report service keys that were overwritten
pub fn compile_with_report(config: &ProjectConfig) -> Compilation {
    if config.applications.is_empty() {
        return Compilation {
            descriptor: ComposeDescriptor::skeleton(),
            overwritten_services: Vec::new(),
        };
    }

    let env_names = effective_environment_names(config);
    let mut graph = Graph::default();

    for app in &config.applications {
        if app.name.trim().is_empty() {
            continue;
        }

        if env_names.is_empty() {
            graph.add_service(
                format!("{}-service", app.name),
                ServiceSpec {
                    image: app.name.clone(),
                    ..ServiceSpec::default()
                },
            );
            continue;
        }

        for env in &env_names {
            let network = network_name(env);
            graph.add_service(
                format!("{}_{}", app.name, env),
                ServiceSpec {
                    image: format!("{}:{}", app.name, env),
                    networks: Some(vec![network.clone()]),
                    ..ServiceSpec::default()
                },
            );
            graph.add_network(network);
        }
    }

    for database in &config.databases {
        if database.name.trim().is_empty() {
            continue;
        }

        if env_names.is_empty() {
            graph.add_service(
                format!("{}-service", database.name),
                database_service(&database.name, database.kind, None),
            );
            graph.add_volume(volume_name(&database.name));
            continue;
        }

        for env in &env_names {
            let network = network_name(env);
            graph.add_service(
                format!("{}_{}", database.name, env),
                database_service(&database.name, database.kind, Some(network.clone())),
            );
            graph.add_network(network);
            graph.add_volume(volume_name(&database.name));
        }
    }

    graph.finish()
}

/// Trimmed, non-blank environment names in insertion order (duplicates kept)
pub fn effective_environment_names(config: &ProjectConfig) -> Vec<String> {
    config
        .environments
        .iter()
        .map(|env| env.name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Service template for a database of the given kind
pub fn database_service(name: &str, kind: DatabaseKind, network: Option<String>) -> ServiceSpec {
    let networks = network.map(|n| vec![n]);

    match kind {
        DatabaseKind::Mysql => ServiceSpec {
            environment: Some(env_keys(&[
                "MYSQL_DATABASE",
                "MYSQL_ROOT_PASSWORD",
                "MYSQL_USER",
                "MYSQL_PASSWORD",
            ])),
            expose: Some(vec![3306]),
            image: "mysql:8.0".to_string(),
            networks,
            restart: Some(RESTART_POLICY.to_string()),
            volumes: Some(vec![format!("{}:/var/lib/mysql", volume_name(name))]),
        },
        DatabaseKind::Postgres => ServiceSpec {
            environment: Some(env_keys(&[
                "POSTGRES_USER",
                "POSTGRES_PASSWORD",
                "POSTGRES_DB",
            ])),
            expose: Some(vec![5432]),
            image: "postgres:15.1".to_string(),
            networks,
            restart: Some(RESTART_POLICY.to_string()),
            volumes: Some(vec![format!(
                "{}:/var/lib/postgresql/data",
                volume_name(name)
            )]),
        },
    }
}

fn env_keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| format!("{}=", k)).collect()
}

fn network_name(env: &str) -> String {
    format!("internal_{}", env)
}

fn volume_name(database: &str) -> String {
    format!("{}_data", database)
}

/// Accumulates descriptor maps for one compile call
#[derive(Default)]
struct Graph {
    services: IndexMap<String, ServiceSpec>,
    networks: IndexMap<String, NetworkSpec>,
    volumes: IndexMap<String, VolumeSpec>,
    overwritten: Vec<String>,
}

impl Graph {
    fn add_service(&mut self, key: String, spec: ServiceSpec) {
        if self.services.insert(key.clone(), spec).is_some() && !self.overwritten.contains(&key) {
            self.overwritten.push(key);
        }
    }

    fn add_network(&mut self, key: String) {
        self.networks.insert(key, NetworkSpec {});
    }

    fn add_volume(&mut self, key: String) {
        self.volumes.insert(key, VolumeSpec {});
    }

    fn finish(self) -> Compilation {
        let descriptor = ComposeDescriptor {
            version: COMPOSE_VERSION.to_string(),
            services: non_empty(self.services),
            networks: non_empty(self.networks),
            volumes: non_empty(self.volumes),
        };

        Compilation {
            descriptor,
            overwritten_services: self.overwritten,
        }
    }
}

fn non_empty<V>(map: IndexMap<String, V>) -> Option<IndexMap<String, V>> {
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}
