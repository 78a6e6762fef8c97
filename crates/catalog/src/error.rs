//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// One or more required shelf files are absent from the data directory.
    ///
    /// This variant carries the full missing set so startup can report
    /// every absent file at once.
    #[error("missing data files in {dir}: {}", .files.join(", "))]
    MissingFiles { dir: String, files: Vec<String> },

    /// A shelf file existed but could not be read
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A language name outside the fixed catalog set
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
