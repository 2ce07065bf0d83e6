/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: registry files,
/// report formatters, output destinations and console progress.
pub mod outbound;
