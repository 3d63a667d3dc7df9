//! Service layer for flora
//!
//! Input validation and use cases between the HTTP handlers and storage.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod category_service;
mod error;
mod plant_service;

pub use category_service::CategoryService;
pub use error::ServiceError;
pub use plant_service::PlantService;
