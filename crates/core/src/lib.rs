//! `brewstock-core` — foundation types for the beer stock domain.
//!
//! Pure domain primitives (identifier, error model); no infrastructure
//! concerns.

pub mod error;
pub mod id;

pub use error::{ConstraintViolation, DomainError, DomainResult};
pub use id::BeerId;
