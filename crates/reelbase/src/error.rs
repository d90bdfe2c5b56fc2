use std::path::PathBuf;

use thiserror::Error;

/// Reelbase-wide error type for movie collections.
///
/// Covers every failure a [`crate::MovieCollection`] can report, from rejecting
/// the backing path at construction to a failed write-back in strict mode.
/// Absence on read-only lookups is not an error: those queries return `None`
/// or a neutral value instead.
#[derive(Error, Debug)]
pub enum ReelbaseError {
    /// I/O operations failed outside of the dedicated cases below
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// The collection path is not absolute
    #[error("Invalid collection path '{}': an absolute path is required", path.display())]
    InvalidPath {
        path: PathBuf,
    },

    /// The backing file does not exist
    #[error("Collection file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
    },

    /// A file was expected to be absent but already exists
    #[error("Collection file already exists: {}", path.display())]
    AlreadyExists {
        path: PathBuf,
    },

    /// No movie matched the title targeted by a mutation
    #[error("Movie '{title}' not found")]
    MovieNotFound {
        title: String,
    },

    /// The top-level JSON value of the collection file is not an array
    #[error("Malformed collection file: {reason}")]
    MalformedCollection {
        reason: String,
    },

    /// A record in the collection file does not have the movie shape
    #[error("Invalid movie record at index {index}: {reason}")]
    InvalidRecord {
        index:  usize,
        reason: String,
    },

    /// Writing the collection back to disk failed in strict mode
    #[error("Failed to persist collection to {}: {source}", path.display())]
    Persistence {
        path:   PathBuf,
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },
}

/// Result type alias for Reelbase operations.
pub type Result<T> = std::result::Result<T, ReelbaseError>;
