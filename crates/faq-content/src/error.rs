//! Content import error types.

use std::path::PathBuf;

/// Errors from loading externally supplied source rows.
///
/// The authored tables never produce these.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The rows file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rows file is not a JSON array of rows.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two generated journey entries share an id.
    #[error("duplicate journey id '{id}' (orders {first_order} and {second_order})")]
    DuplicateIdentifier {
        id: String,
        first_order: u32,
        second_order: u32,
    },
}
