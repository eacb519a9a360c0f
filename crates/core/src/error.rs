//! Domain error model.

use thiserror::Error;

use crate::id::BeerId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single field constraint an input failed to satisfy.
///
/// Carries enough structure for the request layer to report which field was
/// rejected and against which bound, without parsing the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Text field outside its allowed length range (counted in chars).
    #[error("{field} must be {min}-{max} characters, got {len}")]
    Length {
        field: &'static str,
        len: usize,
        min: usize,
        max: usize,
    },

    /// Numeric field above its ceiling.
    #[error("{field} must not exceed {limit}, got {value}")]
    TooLarge {
        field: &'static str,
        value: u32,
        limit: u32,
    },
}

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// uniqueness, capacity). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An input field failed validation, before any storage access.
    #[error("invalid input: {0}")]
    InvalidInput(ConstraintViolation),

    /// A record with the same business-unique name is already registered.
    #[error("beer '{0}' is already registered")]
    DuplicateName(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The requested record was not found.
    #[error("not found")]
    NotFound,

    /// A proposed adjustment would leave the stored quantity outside
    /// `0..=max`. The stored record is untouched when this is returned.
    #[error("stock of beer {id} cannot change by {delta}: quantity is {quantity}, bounds are 0..={max}")]
    StockExceeded {
        id: BeerId,
        delta: i64,
        quantity: u32,
        max: u32,
    },

    /// A storage-level conflict. Ids are assigned internally, so this points
    /// at a broken id source rather than caller error.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_input(violation: ConstraintViolation) -> Self {
        Self::InvalidInput(violation)
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
