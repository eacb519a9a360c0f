//! Storage contract for beer records.

use std::sync::Arc;

use thiserror::Error;

use brewstock_core::{BeerId, DomainError};

use crate::beer::Beer;

/// Storage-level failure of a repository operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Nothing stored under the requested id or name.
    #[error("no record under the requested key")]
    NotFound,

    /// `insert` would overwrite a live record. Ids are assigned internally,
    /// so hitting this means the id source handed out a duplicate.
    #[error("id {0} is already taken")]
    DuplicateKey(BeerId),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => DomainError::not_found(),
            RepositoryError::DuplicateKey(id) => {
                DomainError::conflict(format!("id {id} is already taken"))
            }
        }
    }
}

/// Keyed store of beer records.
///
/// Implementations keep each individual operation internally consistent
/// under concurrent calls; multi-step read-check-write sequences are
/// serialized by the service, not here. There are no partial updates:
/// quantity changes arrive as whole-record [`update`](Self::update) calls.
pub trait BeerRepository: Send + Sync {
    /// Store a brand-new record.
    fn insert(&self, beer: Beer) -> Result<(), RepositoryError>;

    /// Replace the live record carrying the same id.
    fn update(&self, beer: Beer) -> Result<(), RepositoryError>;

    fn find_by_id(&self, id: BeerId) -> Result<Beer, RepositoryError>;

    /// Case-sensitive exact match on the business-unique name.
    fn find_by_name(&self, name: &str) -> Result<Beer, RepositoryError>;

    /// Snapshot of all records, in insertion order.
    fn list_all(&self) -> Vec<Beer>;

    fn delete_by_id(&self, id: BeerId) -> Result<(), RepositoryError>;
}

impl<S> BeerRepository for Arc<S>
where
    S: BeerRepository + ?Sized,
{
    fn insert(&self, beer: Beer) -> Result<(), RepositoryError> {
        (**self).insert(beer)
    }

    fn update(&self, beer: Beer) -> Result<(), RepositoryError> {
        (**self).update(beer)
    }

    fn find_by_id(&self, id: BeerId) -> Result<Beer, RepositoryError> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> Result<Beer, RepositoryError> {
        (**self).find_by_name(name)
    }

    fn list_all(&self) -> Vec<Beer> {
        (**self).list_all()
    }

    fn delete_by_id(&self, id: BeerId) -> Result<(), RepositoryError> {
        (**self).delete_by_id(id)
    }
}
