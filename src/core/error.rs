//! Custom error types for Prospect
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for Prospect operations
#[derive(Error, Debug)]
pub enum ProspectError {
    /// Browser launch or configuration failure
    #[error("Browser init error: {0}")]
    BrowserInit(String),

    /// No live session is available to borrow
    #[error("No browser session available")]
    NoSession,

    /// Failure while navigating or reading a single page
    #[error("Extract error: {0}")]
    Extract(String),

    /// External text-generation failure
    #[error("Generation error: {0}")]
    Generation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input table errors (missing column, unreadable file)
    #[error("Input error: {0}")]
    Input(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for Prospect operations
pub type Result<T> = std::result::Result<T, ProspectError>;

impl ProspectError {
    /// Create a browser init error
    pub fn browser_init(msg: impl Into<String>) -> Self {
        Self::BrowserInit(msg.into())
    }

    /// Create an extract error
    pub fn extract(msg: impl Into<String>) -> Self {
        Self::Extract(msg.into())
    }

    /// Create a generation error
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}
