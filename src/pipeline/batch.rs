//! Batch orchestrator
//!
//! Drives the per-address pipeline (retry-fetch, then compose) over an
//! ordered input sequence. One failing item never aborts the batch; it is
//! recorded and skipped. Progress is reported after every item and reaches
//! exactly 1.0 regardless of how many items succeeded.

use crate::browser::retry::fetch_profile_with_retry;
use crate::browser::session::Navigator;
use crate::core::{BatchReport, ItemFailure, OutreachMessage, ScrapeConfig};
use crate::llm::composer::MessageComposer;
use crate::llm::gemini::TextGenerator;

/// Runs one message-generation batch over a borrowed session
pub struct BatchRunner<'a, N: Navigator, G: TextGenerator> {
    nav: &'a mut N,
    composer: &'a MessageComposer<G>,
    scrape: &'a ScrapeConfig,
}

impl<'a, N: Navigator, G: TextGenerator> BatchRunner<'a, N, G> {
    /// Create a runner borrowing the session for the whole batch
    pub fn new(nav: &'a mut N, composer: &'a MessageComposer<G>, scrape: &'a ScrapeConfig) -> Self {
        Self {
            nav,
            composer,
            scrape,
        }
    }

    /// Process every address in input order.
    ///
    /// `progress` receives `processed / total` after each item.
    pub async fn run(
        &mut self,
        addresses: &[String],
        mut progress: impl FnMut(f64),
    ) -> BatchReport {
        let total = addresses.len();
        let mut report = BatchReport {
            total,
            ..Default::default()
        };

        for (index, address) in addresses.iter().enumerate() {
            match fetch_profile_with_retry(self.nav, address, self.scrape).await {
                Some(record) => {
                    let message = self.composer.compose(&record).await;
                    report.messages.push(OutreachMessage {
                        source_url: address.clone(),
                        message,
                    });
                }
                None => {
                    report.failures.push(ItemFailure {
                        input: address.clone(),
                        reason: format!(
                            "dropped after {} attempts",
                            self.scrape.retry.max_attempts
                        ),
                    });
                }
            }
            progress((index + 1) as f64 / total as f64);
        }

        report
    }
}
