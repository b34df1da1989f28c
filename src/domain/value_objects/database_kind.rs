//! Database Kind Value Object
//!
//! The closed set of database engines the compiler has service templates for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Database engine of a project database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// PostgreSQL (default for new databases)
    #[default]
    Postgres,
    /// MySQL
    Mysql,
}

impl DatabaseKind {
    /// Every supported kind, in menu order
    pub const ALL: [DatabaseKind; 2] = [DatabaseKind::Postgres, DatabaseKind::Mysql];

    /// Lowercase name used in config, CLI arguments and menus
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Postgres => "postgres",
            DatabaseKind::Mysql => "mysql",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DatabaseKind::Postgres),
            "mysql" => Ok(DatabaseKind::Mysql),
            other => Err(format!(
                "unknown database type '{}' (expected one of: postgres, mysql)",
                other
            )),
        }
    }
}
