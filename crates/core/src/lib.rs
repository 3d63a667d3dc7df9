//! Core types for flora
//!
//! Domain types, shared constants and environment configuration used by
//! every other crate in the workspace.

mod category;
mod config;
mod constants;
mod env_config;
mod plant;

pub use category::*;
pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use plant::*;
