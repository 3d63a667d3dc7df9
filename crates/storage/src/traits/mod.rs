//! Storage trait abstraction
//!
//! Async domain traits for storage operations. `PgStorage` is the production
//! implementation; `MemoryStorage` (feature `test-util`) backs tests.

pub mod category;
pub mod plant;

pub use category::CategoryStore;
pub use plant::{PlantReader, PlantStore, PlantWriter};
