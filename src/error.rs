//! Error types for the bookstore-data crate.
//!
//! This module defines semantic error enums for profile loading, dataset
//! generation, and persistence hand-off, following the project's error
//! handling conventions with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating an [`AmountProfile`].
///
/// These errors cover file I/O, JSON parsing, and bound validation failures.
///
/// [`AmountProfile`]: crate::AmountProfile
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read profile file at '{path}': {message}")]
    IoError {
        /// Path to the profile file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The profile JSON is malformed or missing required fields.
    #[error("invalid profile JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The floor ratio is outside the `[0, 1]` interval.
    #[error("minRatio must lie in [0, 1], found {value}")]
    InvalidMinRatio {
        /// The rejected ratio value.
        value: f64,
    },

    /// The country bound is negative but not the `-1` "unlimited" sentinel.
    #[error("maxCountries must be -1 (unlimited) or non-negative, found {value}")]
    InvalidMaxCountries {
        /// The rejected bound value.
        value: i32,
    },
}

/// A failure reported by the external persistence capability.
///
/// The repository's in-memory state may already reflect the mutation when
/// this error surfaces; the core does not roll back appended entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to persist {root}: {message}")]
pub struct PersistenceError {
    /// Name of the aggregate root that failed to persist.
    pub root: String,
    /// Description of the persistence failure.
    pub message: String,
}

impl PersistenceError {
    /// Creates a persistence error for the named aggregate root.
    pub fn new(root: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur during dataset generation.
///
/// The first unrecovered failure inside a generation phase aborts that phase
/// and propagates out of [`DatasetGenerator::generate`]. Entities already
/// handed to a repository before the failure remain; later entities are
/// simply never produced.
///
/// [`DatasetGenerator::generate`]: crate::DatasetGenerator::generate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No fresh ISBN candidate was accepted within the retry cap.
    #[error("no unused ISBN candidate found after {attempts} attempts")]
    IsbnSpaceExhausted {
        /// Number of candidates requested before giving up.
        attempts: usize,
    },

    /// A country working set ended up without any cities.
    #[error("country '{country}' has no cities to draw from")]
    NoCities {
        /// Display name of the affected country.
        country: String,
    },

    /// A country working set ended up without any customers.
    #[error("country '{country}' has no customers to draw from")]
    NoCustomers {
        /// Display name of the affected country.
        country: String,
    },

    /// A selection pool that must hold at least one entry was empty.
    #[error("selection pool '{pool}' is empty")]
    EmptyPool {
        /// Name of the empty pool.
        pool: &'static str,
    },

    /// The persistence capability rejected a hand-off.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_error_io_formats_correctly() {
        let err = ProfileError::IoError {
            path: PathBuf::from("/tmp/profile.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read profile file at '/tmp/profile.json': file not found"
        );
    }

    #[test]
    fn profile_error_min_ratio_formats_correctly() {
        let err = ProfileError::InvalidMinRatio { value: 1.5 };
        assert_eq!(err.to_string(), "minRatio must lie in [0, 1], found 1.5");
    }

    #[test]
    fn persistence_error_formats_correctly() {
        let err = PersistenceError::new("books", "disk full");
        assert_eq!(err.to_string(), "failed to persist books: disk full");
    }

    #[test]
    fn generation_error_isbn_formats_correctly() {
        let err = GenerationError::IsbnSpaceExhausted { attempts: 1000 };
        assert_eq!(
            err.to_string(),
            "no unused ISBN candidate found after 1000 attempts"
        );
    }

    #[test]
    fn generation_error_wraps_persistence_error() {
        let err = GenerationError::from(PersistenceError::new("shops", "timeout"));
        assert_eq!(err.to_string(), "failed to persist shops: timeout");
    }
}
