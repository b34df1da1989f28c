//! Application technology
//!
//! Technology is informational only: the compiler never branches on it, so
//! any string is accepted. `KNOWN` lists what the interactive menu offers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Technology an application is built with (e.g. "node")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Technology(String);

impl Technology {
    /// Technologies offered by the interactive menu
    pub const KNOWN: [&'static str; 3] = ["node", "react", "python"];

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no technology has been chosen
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True when the technology is one of [`Technology::KNOWN`]
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Technology {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
