//! Stock-keeping service: uniqueness, existence, and capacity rules.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use brewstock_core::{BeerId, ConstraintViolation, DomainError, DomainResult};

use crate::beer::{Beer, CreateBeer, QUANTITY_CEILING};
use crate::repository::{BeerRepository, RepositoryError};

/// Business rules over a [`BeerRepository`].
///
/// Every mutating operation runs its read-check-write sequence under one
/// write gate, so two concurrent adjustments (or two creations racing on the
/// same name) cannot both pass their checks. Read-only operations take no
/// gate; the repository keeps individual calls consistent on its own.
pub struct BeerService<R> {
    repo: R,
    write_gate: Mutex<()>,
}

impl<R: BeerRepository> BeerService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            write_gate: Mutex::new(()),
        }
    }

    /// Register a new beer.
    ///
    /// Validates field constraints first (fail fast, before any repository
    /// access), rejects names that are already registered, then assigns a
    /// fresh id and creation stamp and stores the record.
    pub fn create_beer(&self, input: CreateBeer) -> DomainResult<Beer> {
        input.validate().map_err(DomainError::invalid_input)?;

        let _gate = self.lock_writes();
        match self.repo.find_by_name(&input.name) {
            Ok(_) => return Err(DomainError::duplicate_name(input.name)),
            Err(RepositoryError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let beer = Beer {
            id: BeerId::new(),
            name: input.name,
            brand: input.brand,
            style: input.style,
            max: input.max,
            quantity: input.quantity,
            created_at: Utc::now(),
        };
        self.repo.insert(beer.clone())?;

        tracing::info!("registered beer {} ({})", beer.id, beer.name);
        Ok(beer)
    }

    /// Look up a record by its business-unique name (case-sensitive).
    /// `NotFound` is the only error this can produce.
    pub fn find_by_name(&self, name: &str) -> DomainResult<Beer> {
        Ok(self.repo.find_by_name(name)?)
    }

    /// Snapshot of every live record, in insertion order. Never fails.
    pub fn list_all(&self) -> Vec<Beer> {
        self.repo.list_all()
    }

    /// Delete a record by id. After success the record is gone from every
    /// subsequent lookup and listing.
    pub fn delete_by_id(&self, id: BeerId) -> DomainResult<()> {
        let _gate = self.lock_writes();
        self.repo.delete_by_id(id)?;

        tracing::info!("deleted beer {id}");
        Ok(())
    }

    /// Raise the stored quantity by `amount` (at most [`QUANTITY_CEILING`]
    /// per call). Fails with `StockExceeded` and leaves the record untouched
    /// if the result would overshoot the record's capacity; the bound is
    /// inclusive, so filling up to exactly `max` succeeds.
    pub fn increment(&self, id: BeerId, amount: u32) -> DomainResult<Beer> {
        check_amount(amount).map_err(DomainError::invalid_input)?;

        let _gate = self.lock_writes();
        let beer = self.repo.find_by_id(id)?;

        // Widened so the bound check cannot overflow on records fed to the
        // repository past the service.
        let new_quantity = u64::from(beer.quantity) + u64::from(amount);
        if new_quantity > u64::from(beer.max) {
            return Err(DomainError::StockExceeded {
                id,
                delta: i64::from(amount),
                quantity: beer.quantity,
                max: beer.max,
            });
        }

        let updated = Beer {
            quantity: new_quantity as u32,
            ..beer
        };
        self.repo.update(updated.clone())?;

        tracing::debug!("beer {} stock raised to {}", id, updated.quantity);
        Ok(updated)
    }

    /// Lower the stored quantity by `amount` (at most [`QUANTITY_CEILING`]
    /// per call). Fails with `StockExceeded` and leaves the record untouched
    /// if the result would drop below zero; draining to exactly 0 succeeds.
    pub fn decrement(&self, id: BeerId, amount: u32) -> DomainResult<Beer> {
        check_amount(amount).map_err(DomainError::invalid_input)?;

        let _gate = self.lock_writes();
        let beer = self.repo.find_by_id(id)?;

        if amount > beer.quantity {
            return Err(DomainError::StockExceeded {
                id,
                delta: -i64::from(amount),
                quantity: beer.quantity,
                max: beer.max,
            });
        }

        let updated = Beer {
            quantity: beer.quantity - amount,
            ..beer
        };
        self.repo.update(updated.clone())?;

        tracing::debug!("beer {} stock lowered to {}", id, updated.quantity);
        Ok(updated)
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // A panic while holding the gate cannot leave partial state behind
        // (every repository call is atomic), so recover rather than poison
        // the whole service.
        self.write_gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn check_amount(amount: u32) -> Result<(), ConstraintViolation> {
    if amount > QUANTITY_CEILING {
        return Err(ConstraintViolation::TooLarge {
            field: "amount",
            value: amount,
            limit: QUANTITY_CEILING,
        });
    }
    Ok(())
}
