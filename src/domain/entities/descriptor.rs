//! Compose descriptor entities
//!
//! The compiled deployment graph. Field order of the structs is the order in
//! which keys are rendered, and every optional field is omitted when absent.
//! Maps keep first-insertion order, so re-inserting a key replaces its value
//! in place.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Compose file format version written into every descriptor
pub const COMPOSE_VERSION: &str = "3.9";

/// Top-level compose descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeDescriptor {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<IndexMap<String, ServiceSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<IndexMap<String, NetworkSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<IndexMap<String, VolumeSpec>>,
}

impl ComposeDescriptor {
    /// Descriptor carrying only the version
    pub fn skeleton() -> Self {
        Self {
            version: COMPOSE_VERSION.to_string(),
            services: None,
            networks: None,
            volumes: None,
        }
    }

    /// True when only the version is set
    pub fn is_skeleton(&self) -> bool {
        self.services.is_none() && self.networks.is_none() && self.volumes.is_none()
    }

    pub fn service(&self, key: &str) -> Option<&ServiceSpec> {
        self.services.as_ref().and_then(|s| s.get(key))
    }

    pub fn service_count(&self) -> usize {
        self.services.as_ref().map_or(0, IndexMap::len)
    }

    pub fn network_names(&self) -> Vec<&str> {
        self.networks
            .as_ref()
            .map(|n| n.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn volume_names(&self) -> Vec<&str> {
        self.volumes
            .as_ref()
            .map(|v| v.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl Default for ComposeDescriptor {
    fn default() -> Self {
        Self::skeleton()
    }
}

/// One deployable service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceSpec {
    /// `KEY=` entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose: Option<Vec<u16>>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart: Option<String>,
    /// `volume_name:mount_path` entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<String>>,
}

/// Network declaration (always empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkSpec {}

/// Named volume declaration (always empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeSpec {}
