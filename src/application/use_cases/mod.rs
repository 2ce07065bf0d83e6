/// Use cases module containing application business logic orchestration
mod audit_registry;
mod check_compliance;

pub use audit_registry::AuditRegistryUseCase;
pub use check_compliance::CheckComplianceUseCase;
