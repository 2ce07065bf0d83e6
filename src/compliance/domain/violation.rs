use super::registry::Registry;

/// Result of applying one compliance rule to a registry
///
/// `registry` holds only the offending entries, in input order. `markdown`
/// is the rendered report for that subset and is empty when nothing in the
/// subset is attributable to an owner. `unattributed` counts the offending
/// entries the report could not list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub name: String,
    pub registry: Registry,
    pub markdown: Vec<u8>,
    pub unattributed: usize,
}

impl Violation {
    pub fn new(name: impl Into<String>, registry: Registry, markdown: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            registry,
            markdown,
            unattributed: 0,
        }
    }

    pub fn with_unattributed(mut self, unattributed: usize) -> Self {
        self.unattributed = unattributed;
        self
    }

    /// Number of offending entries, attributable or not
    pub fn offending_count(&self) -> usize {
        self.registry.len()
    }

    pub fn has_findings(&self) -> bool {
        !self.registry.is_empty()
    }

    pub fn markdown_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.markdown)
    }
}
