//! LLM module - external text generation with local fallback

pub mod composer;
pub mod gemini;

pub use composer::{build_prompt, fallback_message, MessageComposer};
pub use gemini::{GeminiClient, TextGenerator};
