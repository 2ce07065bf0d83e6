/// Outbound adapters: registry files, report formatters, output and console
pub mod console;
pub mod filesystem;
pub mod formatters;
