//! Settings for the ontology subsystem.
//!
//! Settings are plain serde structs so hosting applications can embed them in
//! their own configuration tree; [`OntologySettings::from_yaml`] covers the
//! standalone case. Every field has a default, so an empty document is a
//! valid configuration.

use serde::{Deserialize, Serialize};

/// Settings controlling resolution and caching behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologySettings {
    /// Resolved-ontology cache sizing.
    #[serde(default)]
    pub cache: CacheSettings,
    /// Maximum number of distinct documents a single import resolution may
    /// visit. `None` leaves the closure unbounded.
    #[serde(default)]
    pub import_budget: Option<usize>,
}

impl OntologySettings {
    /// Deserializes settings from a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

/// Sizing for the resolved-ontology cache.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Maximum number of resolved ontologies retained.
    #[serde(default = "default_capacity")]
    pub capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> u64 {
    1024
}
