//! Compliance core: registry model, metadata rules and the pure services
//! that classify and diff registry entries.
pub mod domain;
pub mod policies;
pub mod services;
