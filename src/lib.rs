//! Prospect - LinkedIn prospecting and outreach automation
//!
//! Scrapes public profile pages through a managed Chrome session and
//! generates a personalized outreach message per profile, or collects
//! executive profile links for a named company from search results.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Browser**: Session lifecycle, page fetch/extract, retry discipline
//! - **LLM**: Gemini-backed message generation with a local fallback
//! - **Pipeline**: Batch orchestration over the shared session
//! - **CLI**: Table I/O and the out-of-band login step
//!
//! The operationally fragile part is the browser session: it must survive
//! page-load variability, login-wall redirects, and transient failures.
//! Every page fetch goes through the bounded-retry wrapper in
//! [`browser::retry`], which probes session liveness before each attempt
//! and transparently replaces a dead session.

pub mod browser;
pub mod cli;
pub mod core;
pub mod llm;
pub mod pipeline;

// Re-export commonly used items
pub use browser::{Navigator, SessionManager};
pub use crate::core::{Config, ProspectError, Result};
pub use llm::{GeminiClient, MessageComposer};
pub use pipeline::{BatchRunner, ExecutiveSearch};
