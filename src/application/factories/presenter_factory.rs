use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Writes to `output` when given, to stdout otherwise
    pub fn create(output: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        match output {
            Some(path) => Box::new(FileSystemWriter::new(path)),
            None => Box::new(StdoutPresenter::new()),
        }
    }
}
