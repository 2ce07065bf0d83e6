/// Filesystem adapters for registry input and report output
mod file_writer;
mod registry_file_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use registry_file_reader::FileSystemRegistryReader;
