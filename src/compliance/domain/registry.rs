use super::location::Location;
use super::metadata::GovernanceMetadata;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryKind {
    CertKeyPair,
    CaBundle,
}

impl EntryKind {
    /// Kubernetes resource kind the entry is stored in
    pub fn resource(&self) -> &'static str {
        match self {
            EntryKind::CertKeyPair => "secret",
            EntryKind::CaBundle => "configmap",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::CertKeyPair => write!(f, "certificate"),
            EntryKind::CaBundle => write!(f, "CA bundle"),
        }
    }
}

/// Common view over the two entry kinds of a registry
pub trait RegistryEntry {
    const KIND: EntryKind;

    fn location(&self) -> &Location;
    fn metadata(&self) -> &GovernanceMetadata;
}

/// A TLS certificate/private-key pair stored in a secret
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertKeyEntry {
    #[serde(default)]
    pub secret_location: Location,
    #[serde(default)]
    pub cert_key_info: GovernanceMetadata,
}

impl CertKeyEntry {
    pub fn new(secret_location: Location, cert_key_info: GovernanceMetadata) -> Self {
        Self {
            secret_location,
            cert_key_info,
        }
    }
}

impl RegistryEntry for CertKeyEntry {
    const KIND: EntryKind = EntryKind::CertKeyPair;

    fn location(&self) -> &Location {
        &self.secret_location
    }

    fn metadata(&self) -> &GovernanceMetadata {
        &self.cert_key_info
    }
}

/// A certificate-authority trust bundle stored in a configmap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaBundleEntry {
    #[serde(default)]
    pub config_map_location: Location,
    #[serde(default)]
    pub ca_bundle_info: GovernanceMetadata,
}

impl CaBundleEntry {
    pub fn new(config_map_location: Location, ca_bundle_info: GovernanceMetadata) -> Self {
        Self {
            config_map_location,
            ca_bundle_info,
        }
    }
}

impl RegistryEntry for CaBundleEntry {
    const KIND: EntryKind = EntryKind::CaBundle;

    fn location(&self) -> &Location {
        &self.config_map_location
    }

    fn metadata(&self) -> &GovernanceMetadata {
        &self.ca_bundle_info
    }
}

/// Point-in-time inventory of cert/key pairs and CA bundles
///
/// Entries of each collection are keyed by location. Duplicate locations are
/// not detected here; callers are expected to dedupe upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    #[serde(default)]
    pub cert_key_pairs: Vec<CertKeyEntry>,
    #[serde(default)]
    pub certificate_authority_bundles: Vec<CaBundleEntry>,
}

impl Registry {
    pub fn new(
        cert_key_pairs: Vec<CertKeyEntry>,
        certificate_authority_bundles: Vec<CaBundleEntry>,
    ) -> Self {
        Self {
            cert_key_pairs,
            certificate_authority_bundles,
        }
    }

    /// Total number of entries of both kinds
    pub fn len(&self) -> usize {
        self.cert_key_pairs.len() + self.certificate_authority_bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
