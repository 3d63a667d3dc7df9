//! Client for the external image classifier.
//!
//! Forwards an uploaded image as multipart form data and hands the
//! classifier's JSON answer back unchanged.

mod client;
mod client_tests;
pub mod error;

pub use client::{ImageUpload, PredictClient, Prediction};
pub use error::PredictError;
