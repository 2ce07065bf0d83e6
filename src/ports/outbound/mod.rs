/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, report writers).
pub mod output_presenter;
pub mod progress_reporter;
pub mod registry_reader;
pub mod report_renderer;
pub mod violation_formatter;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registry_reader::RegistryReader;
pub use report_renderer::ReportRenderer;
pub use violation_formatter::ViolationFormatter;
