//! Upstream resource snapshots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Point-in-time view of one externally-managed resource, as delivered by
/// the event source.
///
/// Carries the composite identity (`namespace` + `name`) the key is derived
/// from and a free-form attribute map the caller-supplied classification
/// function reads to pick a color. The tracker itself never inspects
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    /// Namespace the resource lives in; may be empty for cluster-scoped
    /// resources.
    #[serde(default)]
    pub namespace: String,
    /// Resource name. An empty name means no stable key can be derived.
    pub name: String,
    /// Upstream labels/annotations relevant to classification.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ResourceSnapshot {
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute attachment, used heavily in tests.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
