//! Storage layer for flora
//!
//! PostgreSQL access through sqlx: the category store, the plant read
//! projection, and the transactional plant writer. With the `test-util`
//! feature, `MemoryStorage` implements the same traits in memory for tests.

pub mod error;
#[cfg(any(test, feature = "test-util"))]
mod memory;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod transaction;

pub use error::StorageError;
#[cfg(any(test, feature = "test-util"))]
pub use memory::{MemoryStorage, PlantRow};
pub use pg_storage::PgStorage;
pub use traits::{CategoryStore, PlantReader, PlantStore, PlantWriter};
pub use transaction::{ConnectionSource, UnitOfWork, with_transaction};
