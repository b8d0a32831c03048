//! Shared types used across Prospect modules
//!
//! Contains the scraped profile record, the generated outreach rows,
//! and the per-batch result aggregates.

use serde::{Deserialize, Serialize};

/// Structured data extracted from one profile page.
///
/// Every field defaults to an empty string when the corresponding page
/// element is absent; a partially filled record is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Full display name (top-level heading)
    pub name: String,
    /// Profile headline
    pub headline: String,
    /// Biography text from the about section
    pub about: String,
}

impl ProfileRecord {
    /// Create a record from the three optional page fields
    pub fn new(
        name: impl Into<String>,
        headline: impl Into<String>,
        about: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            headline: headline.into(),
            about: about.into(),
        }
    }

    /// True when no field could be extracted at all
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.headline.is_empty() && self.about.is_empty()
    }
}

/// A generated outreach message tied to the address it was derived from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachMessage {
    /// The input profile address (as supplied, before normalization)
    pub source_url: String,
    /// The composed message text
    pub message: String,
}

/// One search hit from the company-research path.
///
/// Deduplication is not guaranteed: the same profile can appear under
/// several role queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveLead {
    /// Result title as shown by the search engine
    pub title: String,
    /// Profile address the result points at
    pub profile_url: String,
}

/// A dropped input item and the reason it was dropped
#[derive(Debug, Clone)]
pub struct ItemFailure {
    /// The input the failure traces to (address or role keyword)
    pub input: String,
    /// Human-readable reason
    pub reason: String,
}

/// Outcome of one message-generation batch
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successfully generated messages, in input order
    pub messages: Vec<OutreachMessage>,
    /// Inputs that were dropped after retries
    pub failures: Vec<ItemFailure>,
    /// Total number of inputs processed
    pub total: usize,
}

impl BatchReport {
    /// True when zero items succeeded across the whole batch.
    ///
    /// Reported distinctly from partial success.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Outcome of one company-research run
#[derive(Debug, Default)]
pub struct LeadReport {
    /// Collected leads across all role queries (may contain duplicates)
    pub leads: Vec<ExecutiveLead>,
    /// Role queries that were dropped after retries
    pub failures: Vec<ItemFailure>,
    /// Number of role queries issued
    pub total_roles: usize,
}

impl LeadReport {
    /// True when no lead was collected across all role queries
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_record() {
        assert!(ProfileRecord::default().is_blank());
        assert!(!ProfileRecord::new("Jane Doe", "", "").is_blank());
    }

    #[test]
    fn test_empty_report_is_distinct_from_partial() {
        let mut report = BatchReport {
            total: 2,
            ..Default::default()
        };
        report.failures.push(ItemFailure {
            input: "a".into(),
            reason: "gone".into(),
        });
        assert!(report.is_empty());

        report.messages.push(OutreachMessage {
            source_url: "b".into(),
            message: "hi".into(),
        });
        assert!(!report.is_empty());
    }
}
