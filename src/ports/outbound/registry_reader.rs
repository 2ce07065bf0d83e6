use crate::compliance::domain::Registry;
use crate::shared::Result;
use std::path::Path;

/// RegistryReader port for loading a registry snapshot
///
/// Discovery of certificates in a live cluster happens elsewhere; this port
/// only loads an already collected inventory.
pub trait RegistryReader {
    /// Loads the registry stored at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid registry document
    fn read_registry(&self, path: &Path) -> Result<Registry>;
}
