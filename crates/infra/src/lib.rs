//! Infrastructure layer: storage implementations for the beer stock domain.

pub mod in_memory;

pub use in_memory::InMemoryBeerRepository;
