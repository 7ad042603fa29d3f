//! Error types for the combobox application.

use std::path::PathBuf;

use thiserror::Error;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`AppConfig`](crate::config::AppConfig).
    #[error("Invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config values that parse but cannot be used.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// HTTP request to the country service failed.
    #[error("Country request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Country service answered with a non-success status.
    #[error("Country service returned {status}")]
    Status { status: reqwest::StatusCode },

    /// Country data is not the expected JSON.
    #[error("Invalid country data: {0}")]
    Json(#[from] serde_json::Error),

    /// Country file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup, drawing or input failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
