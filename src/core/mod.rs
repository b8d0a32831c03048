//! Core module - shared infrastructure for Prospect
//!
//! This module contains foundational types, configuration, and error handling
//! used throughout the application.

pub mod config;
pub mod error;
pub mod types;

pub use config::{BrowserConfig, Config, GeminiConfig, RetryPolicy, ScrapeConfig, SearchConfig};
pub use error::{ProspectError, Result};
pub use types::*;
