mod field_differ;
mod violation_classifier;

pub use field_differ::{
    diff_ca_bundle_description, diff_cert_key_description, diff_field, diff_metadata,
};
pub use violation_classifier::{partition, ViolationClassifier};
