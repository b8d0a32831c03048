//! Company-executive research
//!
//! For each configured role keyword, runs a site-scoped search for the
//! company and collects every result link that points at a profile.
//! Shares the session and the bounded-retry discipline with the profile
//! path; a role whose search page cannot be fetched is recorded and
//! skipped, it does not abort the remaining roles.

use scraper::{Html, Selector};

use crate::browser::retry::page_with_retry;
use crate::browser::session::Navigator;
use crate::core::{ExecutiveLead, ItemFailure, LeadReport, SearchConfig};

/// Marker a result link must contain to count as a profile
const PROFILE_PATH_MARKER: &str = "linkedin.com/in";

/// Container class the search engine wraps organic result links in
const RESULT_LINK_SELECTOR: &str = "div.yuRUbf a";

/// Compose the site-scoped search query for one role at one company
pub fn build_role_query(role: &str, company: &str) -> String {
    format!(r#"site:linkedin.com/in "{}" "{}""#, role, company)
}

/// Compose the search-results address for a query
pub fn search_url(query: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(query)
    )
}

/// Extract profile leads from a search-results page.
///
/// No deduplication: the same profile surfacing under several role
/// queries is kept each time.
pub fn parse_search_results(markup: &str) -> Vec<ExecutiveLead> {
    let html = Html::parse_document(markup);
    let Ok(selector) = Selector::parse(RESULT_LINK_SELECTOR) else {
        return Vec::new();
    };

    html.select(&selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            if !href.contains(PROFILE_PATH_MARKER) {
                return None;
            }
            let title = anchor
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            Some(ExecutiveLead {
                title,
                profile_url: href.to_string(),
            })
        })
        .collect()
}

/// Runs the company-research path over a borrowed session
pub struct ExecutiveSearch<'a, N: Navigator> {
    nav: &'a mut N,
    config: &'a SearchConfig,
}

impl<'a, N: Navigator> ExecutiveSearch<'a, N> {
    /// Create a search runner borrowing the session
    pub fn new(nav: &'a mut N, config: &'a SearchConfig) -> Self {
        Self { nav, config }
    }

    /// Query every configured role for the company.
    ///
    /// `progress` receives `roles queried / total roles` after each role.
    pub async fn run(&mut self, company: &str, mut progress: impl FnMut(f64)) -> LeadReport {
        let total = self.config.roles.len();
        let mut report = LeadReport {
            total_roles: total,
            ..Default::default()
        };

        for (index, role) in self.config.roles.iter().enumerate() {
            let query = build_role_query(role, company);
            let url = search_url(&query);

            match page_with_retry(self.nav, &url, self.config.settle(), &self.config.retry).await
            {
                Some(markup) => report.leads.extend(parse_search_results(&markup)),
                None => report.failures.push(ItemFailure {
                    input: role.clone(),
                    reason: format!(
                        "search dropped after {} attempts",
                        self.config.retry.max_attempts
                    ),
                }),
            }
            progress((index + 1) as f64 / total as f64);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_query_shape() {
        assert_eq!(
            build_role_query("CEO", "Acme Corp"),
            r#"site:linkedin.com/in "CEO" "Acme Corp""#
        );
    }

    #[test]
    fn test_search_url_is_encoded() {
        let url = search_url(r#"site:linkedin.com/in "CEO" "Acme Corp""#);
        assert!(url.starts_with("https://www.google.com/search?q="));
        assert!(!url.contains(' '));
        assert!(!url.contains('"'));
    }

    #[test]
    fn test_parse_search_results() {
        let markup = r#"
            <div class="yuRUbf">
              <a href="https://www.linkedin.com/in/janedoe">Jane Doe - CEO - Acme</a>
            </div>
            <div class="yuRUbf">
              <a href="https://example.com/not-a-profile">Unrelated hit</a>
            </div>
            <a href="https://www.linkedin.com/in/stray">Outside the container</a>
        "#;
        let leads = parse_search_results(markup);
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].title, "Jane Doe - CEO - Acme");
        assert_eq!(leads[0].profile_url, "https://www.linkedin.com/in/janedoe");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let markup = r#"
            <div class="yuRUbf"><a href="https://www.linkedin.com/in/janedoe">Jane</a></div>
            <div class="yuRUbf"><a href="https://www.linkedin.com/in/janedoe">Jane</a></div>
        "#;
        assert_eq!(parse_search_results(markup).len(), 2);
    }
}
