//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{FileReader, ReadMode};
pub use glob_resolver::resolve_patterns;

use std::path::PathBuf;

/// One document to sniff
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input, requested with `-`
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name used in output
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "-".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}
