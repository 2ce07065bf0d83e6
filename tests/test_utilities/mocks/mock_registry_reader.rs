use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tls_metadata_check::prelude::*;

/// Mock RegistryReader for testing, serving registries by path
#[derive(Default)]
pub struct MockRegistryReader {
    pub registries: HashMap<PathBuf, Registry>,
    pub should_fail: bool,
}

impl MockRegistryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, path: impl Into<PathBuf>, registry: Registry) -> Self {
        self.registries.insert(path.into(), registry);
        self
    }

    #[allow(dead_code)]
    pub fn with_failure() -> Self {
        Self {
            registries: HashMap::new(),
            should_fail: true,
        }
    }
}

impl RegistryReader for MockRegistryReader {
    fn read_registry(&self, path: &Path) -> Result<Registry> {
        if self.should_fail {
            anyhow::bail!("Mock registry read failure");
        }
        self.registries
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock registry not found: {}", path.display()))
    }
}
