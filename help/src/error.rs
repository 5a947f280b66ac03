//! Error types for help rendering and configuration.

use thiserror::Error;

/// Errors that can occur while loading configuration or rendering help.
#[derive(Debug, Error)]
pub enum HelpError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Configuration values that cannot produce a layout.
    #[error("invalid help config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results with [`HelpError`].
pub type Result<T> = std::result::Result<T, HelpError>;
