pub mod location;
pub mod metadata;
pub mod registry;
pub mod violation;

pub use location::Location;
pub use metadata::{GovernanceMetadata, MetadataField};
pub use registry::{CaBundleEntry, CertKeyEntry, EntryKind, Registry, RegistryEntry};
pub use violation::Violation;
