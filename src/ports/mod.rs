/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the seams through which the compliance core reads
/// registries and emits reports.
pub mod outbound;
