//! Process configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;

use crate::{
    DEFAULT_CORS_ORIGIN, DEFAULT_DATASET_DIR, DEFAULT_PLANT_LIST_LIMIT, DEFAULT_PORT,
    DEFAULT_PREDICT_API_URL, DEFAULT_PUBLIC_BASE_URL, PG_POOL_MAX_CONNECTIONS, parse_with_default,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
}

/// Runtime settings shared by the server and the CLI tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    /// Prefix for dataset image URLs returned to clients.
    pub public_base_url: String,
    pub predict_api_url: String,
    pub dataset_dir: PathBuf,
    pub cors_origin: String,
    pub port: u16,
    pub plant_list_limit: usize,
    pub pg_max_connections: u32,
}

impl AppConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] when `DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] when `DATABASE_URL` is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url =
            non_empty("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?;
        let public_base_url = non_empty("PUBLIC_BASE_URL")
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        // FLASK_API_URL is the name older deployments used for the classifier endpoint.
        let predict_api_url = non_empty("PREDICT_API_URL")
            .or_else(|| non_empty("FLASK_API_URL"))
            .unwrap_or_else(|| DEFAULT_PREDICT_API_URL.to_owned());
        let dataset_dir = non_empty("FLORA_DATASET_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATASET_DIR), PathBuf::from);
        let cors_origin =
            non_empty("FLORA_CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_owned());

        Ok(Self {
            database_url,
            public_base_url,
            predict_api_url,
            dataset_dir,
            cors_origin,
            port: parse_with_default("PORT", lookup("PORT"), DEFAULT_PORT),
            plant_list_limit: parse_with_default(
                "FLORA_PLANT_LIST_LIMIT",
                lookup("FLORA_PLANT_LIST_LIMIT"),
                DEFAULT_PLANT_LIST_LIMIT,
            ),
            pg_max_connections: parse_with_default(
                "FLORA_PG_MAX_CONNECTIONS",
                lookup("FLORA_PG_MAX_CONNECTIONS"),
                PG_POOL_MAX_CONNECTIONS,
            ),
        })
    }
}
