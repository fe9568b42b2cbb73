//! Unified error types for support-banner
//!
//! This module defines all error types used throughout the crate.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level error type
///
/// The two context checks (shallow stack, non-notebook frame) are not
/// errors; they are silent early exits reported through
/// [`crate::service::BannerOutcome`].
#[derive(Error, Debug)]
pub enum BannerError {
    /// Error from configuration validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from counter persistence
    #[error("Counter error: {0}")]
    Counter(#[from] CounterError),

    /// Error from the rendering surface
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Errors from configuration assembly and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Missing required config field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from counter file persistence
#[derive(Error, Debug)]
pub enum CounterError {
    /// Counter file read or write failed
    #[error("Counter file IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted counter file exists but is not valid JSON
    ///
    /// Never recovered from; a corrupt file is surfaced rather than
    /// silently reset.
    #[error("Malformed counter file {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Counter map could not be serialized
    #[error("Failed to serialize counter map: {0}")]
    Serialize(serde_json::Error),
}

/// Errors from the display surface
#[derive(Error, Debug)]
pub enum RenderError {
    /// Writing to the display surface failed
    #[error("Display surface write failed: {0}")]
    Io(#[from] std::io::Error),

    /// No display surface is available in this environment
    #[error("Display surface unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias using BannerError
pub type Result<T> = std::result::Result<T, BannerError>;
