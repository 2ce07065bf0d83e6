/// Formatter adapters for rule reports and run output
mod json_formatter;
mod markdown;
mod markdown_formatter;
mod markdown_report_renderer;

pub use json_formatter::JsonFormatter;
pub use markdown::MarkdownBuilder;
pub use markdown_formatter::MarkdownFormatter;
pub use markdown_report_renderer::MarkdownReportRenderer;
