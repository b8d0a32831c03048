//! Message composer
//!
//! Turns an extracted profile record into outreach text. The external
//! generation call is best-effort; any failure falls back to a
//! deterministic local template, so composing never fails.

use crate::core::ProfileRecord;
use crate::llm::gemini::TextGenerator;

/// Composes outreach messages, with a local fallback
pub struct MessageComposer<G: TextGenerator> {
    generator: Option<G>,
    debug: bool,
}

impl<G: TextGenerator> MessageComposer<G> {
    /// Create a composer backed by an external generator
    pub fn new(generator: G) -> Self {
        Self {
            generator: Some(generator),
            debug: false,
        }
    }

    /// Create a composer that only ever uses the local fallback
    pub fn fallback_only() -> Self {
        Self {
            generator: None,
            debug: false,
        }
    }

    /// Enable or disable debug output
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Compose a message for one profile. Infallible: on any generation
    /// failure the deterministic fallback is used instead.
    pub async fn compose(&self, record: &ProfileRecord) -> String {
        if let Some(ref generator) = self.generator {
            match generator.generate(&build_prompt(record)).await {
                Ok(text) => return text,
                Err(e) => {
                    if self.debug {
                        eprintln!("Generation failed, using fallback: {}", e);
                    }
                }
            }
        }
        fallback_message(&record.name, &record.headline)
    }
}

/// Build the generation prompt for one profile
pub fn build_prompt(record: &ProfileRecord) -> String {
    format!(
        "Write a detailed, personalized LinkedIn connection request to {}, whose headline is:\n\
         \"{}\"\n\n\
         About section:\n\
         \"{}\"\n\n\
         Requirements:\n\
         1. At least 4 lines long\n\
         2. Mention their company name if visible\n\
         3. Reference recent activity or achievements if mentioned\n\
         4. Professional but warm\n\
         5. Genuine interest\n\
         6. Specific reason for connecting\n\
         7. Clear call to action\n\n\
         Format naturally.",
        record.name, record.headline, record.about
    )
}

/// Deterministic local template used when the external call fails.
///
/// Must succeed for any input, including an empty name (no first token
/// to greet) and an empty headline.
pub fn fallback_message(name: &str, headline: &str) -> String {
    let first_name = name.split_whitespace().next().unwrap_or("there");
    let credential = if headline.is_empty() {
        "your background".to_string()
    } else {
        format!("your experience as {}", headline)
    };
    format!(
        "Hi {},\n\nI came across your profile and was impressed by {}. \
         Looking forward to connecting!",
        first_name, credential
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ProspectError, Result};
    use async_trait::async_trait;

    struct DownGenerator;

    #[async_trait]
    impl TextGenerator for DownGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(ProspectError::generation("quota exhausted"))
        }
    }

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("generated({} chars)", prompt.len()))
        }
    }

    #[tokio::test]
    async fn test_compose_uses_generator_when_available() {
        let composer = MessageComposer::new(EchoGenerator);
        let record = ProfileRecord::new("Jane Doe", "CTO at Acme", "");
        let message = composer.compose(&record).await;
        assert!(message.starts_with("generated("));
    }

    #[tokio::test]
    async fn test_compose_falls_back_when_generator_fails() {
        let composer = MessageComposer::new(DownGenerator);
        let record = ProfileRecord::new("Jane Doe", "CTO at Acme", "");
        let message = composer.compose(&record).await;
        assert!(message.contains("Hi Jane"));
        assert!(message.contains("CTO at Acme"));
    }

    #[tokio::test]
    async fn test_compose_never_fails_on_empty_record() {
        let composer: MessageComposer<DownGenerator> = MessageComposer::fallback_only();
        let message = composer.compose(&ProfileRecord::default()).await;
        assert!(!message.is_empty());
        assert!(message.contains("Hi there"));
    }

    #[test]
    fn test_fallback_with_single_token_name() {
        let message = fallback_message("Prince", "Musician");
        assert!(message.contains("Hi Prince"));
        assert!(message.contains("your experience as Musician"));
    }

    #[test]
    fn test_prompt_embeds_all_fields() {
        let record = ProfileRecord::new("Jane Doe", "CTO", "Ships things.");
        let prompt = build_prompt(&record);
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("\"CTO\""));
        assert!(prompt.contains("Ships things."));
        assert!(prompt.contains("call to action"));
    }
}
