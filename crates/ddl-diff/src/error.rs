//! Error types for the schema diff engine.

use std::path::PathBuf;

/// Errors that can occur while diffing schemas or writing the results.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// An ENUM column definition does not contain exactly one `(`/`)` pair.
    ///
    /// This aborts the whole diff: no statements are produced for the run.
    #[error("Cannot parse ENUM for column '{table}.{column}': {definition}")]
    EnumParse {
        /// Table owning the column.
        table: String,
        /// Column whose definition could not be parsed.
        column: String,
        /// The offending (normalized) definition.
        definition: String,
    },

    /// IO error while reading an input or writing an artifact.
    #[error("IO error on '{path}': {source}")]
    Io {
        /// Path of the file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error while dumping a schema model.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DiffError {
    /// Wraps an IO error with the path it occurred on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for diff operations.
pub type Result<T> = std::result::Result<T, DiffError>;
