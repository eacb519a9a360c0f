//! Beer stock domain: the record type, its validation, the repository
//! contract, and the stock-keeping service.
//!
//! Business rules live here as deterministic logic over a pluggable
//! [`BeerRepository`] (no IO, no HTTP, no storage engine).

pub mod beer;
pub mod repository;
pub mod service;

pub use beer::{Beer, BeerStyle, CreateBeer, MAX_CAPACITY, MAX_TEXT_LEN, QUANTITY_CEILING};
pub use repository::{BeerRepository, RepositoryError};
pub use service::BeerService;
