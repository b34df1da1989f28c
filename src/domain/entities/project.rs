//! Project configuration entities
//!
//! `ProjectConfig` is the aggregate root describing a project: its
//! environments, applications and databases. Values are snapshots: every
//! operation takes `&self` and returns a new `ProjectConfig`, leaving the
//! original untouched. Ids are supplied by the caller (see
//! `application::store::ProjectConfigStore`), which keeps snapshots free of
//! any generator state.
//!
//! Operations are total. An id that matches nothing yields a snapshot equal
//! to the input, and blank names are stored as-is.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DatabaseKind, EntityId, Technology};

/// Deployment environment (e.g. "prod", "dev")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub id: EntityId,
    pub name: String,
}

/// Application service built from the project's own image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: EntityId,
    pub name: String,
    pub technology: Technology,
}

/// Database backing the project's applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DatabaseKind,
}

/// Immutable snapshot of a project description
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub environments: Vec<Environment>,
    pub applications: Vec<Application>,
    pub databases: Vec<Database>,
}

impl ProjectConfig {
    /// Empty project
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the project has no entities at all
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty() && self.applications.is_empty() && self.databases.is_empty()
    }

    /// True when any live entity of any kind carries `id`
    pub fn contains_id(&self, id: &EntityId) -> bool {
        self.environments.iter().any(|e| &e.id == id)
            || self.applications.iter().any(|a| &a.id == id)
            || self.databases.iter().any(|d| &d.id == id)
    }

    pub fn environment(&self, id: &EntityId) -> Option<&Environment> {
        self.environments.iter().find(|e| &e.id == id)
    }

    pub fn application(&self, id: &EntityId) -> Option<&Application> {
        self.applications.iter().find(|a| &a.id == id)
    }

    pub fn database(&self, id: &EntityId) -> Option<&Database> {
        self.databases.iter().find(|d| &d.id == id)
    }

    // Environments

    /// Append an environment with a blank name
    pub fn add_environment(&self, id: EntityId) -> Self {
        let mut environments = self.environments.clone();
        environments.push(Environment {
            id,
            name: String::new(),
        });
        Self {
            environments,
            ..self.clone()
        }
    }

    pub fn rename_environment(&self, id: &EntityId, name: &str) -> Self {
        Self {
            environments: replace_where(&self.environments, |e| &e.id == id, |e| Environment {
                name: name.to_string(),
                ..e.clone()
            }),
            ..self.clone()
        }
    }

    pub fn remove_environment(&self, id: &EntityId) -> Self {
        Self {
            environments: retain_except(&self.environments, |e| &e.id == id),
            ..self.clone()
        }
    }

    // Applications

    /// Append an application with a blank name and no technology
    pub fn add_application(&self, id: EntityId) -> Self {
        let mut applications = self.applications.clone();
        applications.push(Application {
            id,
            name: String::new(),
            technology: Technology::default(),
        });
        Self {
            applications,
            ..self.clone()
        }
    }

    pub fn rename_application(&self, id: &EntityId, name: &str) -> Self {
        Self {
            applications: replace_where(&self.applications, |a| &a.id == id, |a| Application {
                name: name.to_string(),
                ..a.clone()
            }),
            ..self.clone()
        }
    }

    pub fn set_application_technology(&self, id: &EntityId, technology: Technology) -> Self {
        Self {
            applications: replace_where(&self.applications, |a| &a.id == id, |a| Application {
                technology: technology.clone(),
                ..a.clone()
            }),
            ..self.clone()
        }
    }

    pub fn remove_application(&self, id: &EntityId) -> Self {
        Self {
            applications: retain_except(&self.applications, |a| &a.id == id),
            ..self.clone()
        }
    }

    // Databases

    /// Append a database with a blank name; new databases are postgres
    pub fn add_database(&self, id: EntityId) -> Self {
        let mut databases = self.databases.clone();
        databases.push(Database {
            id,
            name: String::new(),
            kind: DatabaseKind::Postgres,
        });
        Self {
            databases,
            ..self.clone()
        }
    }

    pub fn rename_database(&self, id: &EntityId, name: &str) -> Self {
        Self {
            databases: replace_where(&self.databases, |d| &d.id == id, |d| Database {
                name: name.to_string(),
                ..d.clone()
            }),
            ..self.clone()
        }
    }

    pub fn set_database_type(&self, id: &EntityId, kind: DatabaseKind) -> Self {
        Self {
            databases: replace_where(&self.databases, |d| &d.id == id, |d| Database {
                kind,
                ..d.clone()
            }),
            ..self.clone()
        }
    }

    pub fn remove_database(&self, id: &EntityId) -> Self {
        Self {
            databases: retain_except(&self.databases, |d| &d.id == id),
            ..self.clone()
        }
    }
}

/// Copy `items`, swapping every element matching `pred` for `replace(element)`
fn replace_where<T: Clone>(
    items: &[T],
    pred: impl Fn(&T) -> bool,
    replace: impl Fn(&T) -> T,
) -> Vec<T> {
    items
        .iter()
        .map(|item| if pred(item) { replace(item) } else { item.clone() })
        .collect()
}

fn retain_except<T: Clone>(items: &[T], pred: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| !pred(item)).cloned().collect()
}
