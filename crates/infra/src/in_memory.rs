//! In-memory beer store for tests/dev.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use brewstock_core::BeerId;
use brewstock_inventory::{Beer, BeerRepository, RepositoryError};

/// In-memory [`BeerRepository`].
///
/// Backed by a `Vec` in insertion order: `list_all` needs that order anyway,
/// record sets are small, and both keys are resolved by linear scan.
#[derive(Debug, Default)]
pub struct InMemoryBeerRepository {
    records: RwLock<Vec<Beer>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section leaves the vector consistent, so a poisoned
    // lock still guards valid data and is safe to reclaim.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Beer>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Beer>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BeerRepository for InMemoryBeerRepository {
    fn insert(&self, beer: Beer) -> Result<(), RepositoryError> {
        let mut records = self.write();
        if records.iter().any(|b| b.id == beer.id) {
            return Err(RepositoryError::DuplicateKey(beer.id));
        }
        records.push(beer);
        Ok(())
    }

    fn update(&self, beer: Beer) -> Result<(), RepositoryError> {
        let mut records = self.write();
        match records.iter_mut().find(|b| b.id == beer.id) {
            Some(slot) => {
                *slot = beer;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn find_by_id(&self, id: BeerId) -> Result<Beer, RepositoryError> {
        self.read()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    fn find_by_name(&self, name: &str) -> Result<Beer, RepositoryError> {
        self.read()
            .iter()
            .find(|b| b.name == name)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    fn list_all(&self) -> Vec<Beer> {
        self.read().clone()
    }

    fn delete_by_id(&self, id: BeerId) -> Result<(), RepositoryError> {
        let mut records = self.write();
        let pos = records
            .iter()
            .position(|b| b.id == id)
            .ok_or(RepositoryError::NotFound)?;
        records.remove(pos);
        Ok(())
    }
}
