use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{RecommenderError, Result};

/// Runtime configuration, read from `RECOMMENDER_*` environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path of the CSV catalog
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Number of recommendations returned when the caller does not ask for a count
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Fallback log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("netflixData.csv")
}

fn default_top_n() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            top_n: default_top_n(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub const ENV_PREFIX: &'static str = "RECOMMENDER_";

    /// Load configuration from the environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_iter<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(Self::ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| RecommenderError::Config(e.to_string()))
    }
}
