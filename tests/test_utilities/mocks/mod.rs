/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_registry_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_registry_reader::MockRegistryReader;
