use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage location of a registry entry (namespace + resource name)
///
/// Identity of an entry within a registry snapshot. Ordering is by
/// namespace first, then name.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Location {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub name: String,
}

impl Location {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
