/// Result alias used by the application shell and adapters.
/// Domain failures are `ComplianceError` values wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
