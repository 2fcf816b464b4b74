use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the fallible edges of the dashboard: configuration,
/// distribution parameters and command-line word lookups.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to read {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid frequency distribution: mean={mean}, std_dev={std_dev}")]
    InvalidDistribution { mean: f64, std_dev: f64 },

    #[error("Unknown word '{word}'. Available words: {}", .available.join(", "))]
    UnknownWord { word: String, available: Vec<String> },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashboardError {
    pub fn unknown_word(word: impl Into<String>, available: &[String]) -> Self {
        Self::UnknownWord {
            word: word.into(),
            available: available.to_vec(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
