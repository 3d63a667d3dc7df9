//! Shared constants for flora.
//!
//! Centralizes defaults that would otherwise be repeated across crates.

/// Maximum rows returned by the "all plants" projection unless overridden.
pub const DEFAULT_PLANT_LIST_LIMIT: usize = 52;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Base URL prepended to dataset image paths when none is configured.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";

/// Classifier endpoint used when none is configured.
pub const DEFAULT_PREDICT_API_URL: &str = "http://localhost:5000/predict";

/// Origin allowed by CORS when none is configured.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Directory served under `/dataset` and scanned by the seeder.
pub const DEFAULT_DATASET_DIR: &str = "../dataset";

/// Timeout for a single classifier request in seconds.
pub const PREDICT_TIMEOUT_SECS: u64 = 60;

/// Upper bound for uploaded image bodies.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
