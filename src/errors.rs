//! Unified error type for the survey record store.

use crate::entities::RecordKind;
use thiserror::Error;

/// Errors surfaced by the record store, its loader, and configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Seed or environment configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The store was used through a provider that never received one
    #[error("Record store used before it was provided; construct the store at startup")]
    StoreNotProvided,

    /// No record with this id exists in the targeted list
    #[error("{kind} record {id} not found")]
    RecordNotFound {
        /// Kind of list searched
        kind: RecordKind,
        /// Missing id
        id: i64,
    },

    /// A text value was assigned to a flag field or the other way around
    #[error("Field `{field}` expects a {expected} value")]
    FieldType {
        /// Field name as shown on the form
        field: &'static str,
        /// "text" or "flag"
        expected: &'static str,
    },

    /// The initial load could not produce a seed
    #[error("Initial load failed: {message}")]
    Load {
        /// What went wrong
        message: String,
    },

    /// I/O error while reading a seed file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
