//! Error types for shape violations and strict lookups.
//!
//! Uses `thiserror` for ergonomic error definition. Every error here signals
//! a programmer or input-shape mistake, never a transient fault: callers are
//! expected to propagate rather than retry.

use thiserror::Error;

/// The error type for arrayshape operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid list shape error.
    #[must_use]
    pub fn invalid_list_shape() -> Self {
        Self::new(ErrorKind::InvalidListShape)
    }

    /// Creates an invalid map shape error.
    #[must_use]
    pub fn invalid_map_shape() -> Self {
        Self::new(ErrorKind::InvalidMapShape)
    }

    /// Creates a missing first element error.
    #[must_use]
    pub fn first_element_missing() -> Self {
        Self::new(ErrorKind::FirstElementMissing)
    }

    /// Creates a key not found error.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyNotFound { key: key.into() })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Serialization(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An ordered list was constructed from non-contiguous keyed entries.
    #[error("cannot create an ordered list from non-contiguous keys")]
    InvalidListShape,

    /// A keyed map was constructed from list-shaped entries.
    #[error("cannot create a keyed map from list-shaped entries")]
    InvalidMapShape,

    /// `head()` was called on a list with no element at index 0.
    #[error("first element of the list does not exist")]
    FirstElementMissing,

    /// A strict lookup did not find its key.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The key or dotted path that was looked up.
        key: String,
    },

    /// JSON encoding failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
