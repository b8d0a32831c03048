//! Page fetch and profile extraction
//!
//! Navigation plus a fixed settle delay, then CSS-selector extraction over
//! the rendered markup. Every profile field is optional; a missing element
//! yields an empty string, never a failed extraction.

use scraper::{ElementRef, Html, Selector};
use tokio::time::sleep;

use crate::browser::session::Navigator;
use crate::core::{ProfileRecord, Result, ScrapeConfig};

/// Canonical site root composed onto relative profile addresses
pub const PROFILE_ROOT: &str = "https://www.linkedin.com/";

/// Normalize an input address onto the canonical site root.
///
/// Idempotent: an already-normalized address passes through unchanged.
pub fn normalize_profile_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with(PROFILE_ROOT) {
        trimmed.to_string()
    } else {
        format!("{}{}", PROFILE_ROOT, trimmed.trim_start_matches('/'))
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn select_text(html: &Html, selector: &str) -> String {
    Selector::parse(selector)
        .ok()
        .and_then(|sel| html.select(&sel).next())
        .map(element_text)
        .unwrap_or_default()
}

/// Extract a profile record from rendered markup.
///
/// Selectors track the page layout the tool was written against and are
/// expected to rot; each one fails soft to an empty field.
pub fn parse_profile(markup: &str) -> ProfileRecord {
    let html = Html::parse_document(markup);

    let name = select_text(&html, "h1");
    let headline = select_text(&html, "div.text-body-medium");
    let about = select_text(&html, "section#about div.pv-shared-text-with-see-more");

    ProfileRecord::new(name, headline, about)
}

/// Navigate to a (normalized) profile address and extract a record.
///
/// One attempt only; the retry controller wraps this.
pub async fn fetch_profile<N: Navigator>(
    nav: &mut N,
    address: &str,
    scrape: &ScrapeConfig,
) -> Result<ProfileRecord> {
    let url = normalize_profile_url(address);
    nav.goto(&url).await?;
    sleep(scrape.settle()).await;
    let markup = nav.content().await?;
    Ok(parse_profile(&markup))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PROFILE: &str = r#"
        <html><body>
          <h1>Jane Doe</h1>
          <div class="text-body-medium">CTO at Acme Corp</div>
          <section id="about">
            <div class="pv-shared-text-with-see-more">
              Building
              distributed systems for 12 years.
            </div>
          </section>
        </body></html>"#;

    #[test]
    fn test_parse_full_profile() {
        let record = parse_profile(FULL_PROFILE);
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.headline, "CTO at Acme Corp");
        assert_eq!(record.about, "Building distributed systems for 12 years.");
    }

    #[test]
    fn test_missing_elements_yield_empty_fields() {
        let record = parse_profile("<html><body><p>nothing here</p></body></html>");
        assert_eq!(record, ProfileRecord::default());
        assert!(record.is_blank());
    }

    #[test]
    fn test_partial_profile_is_valid() {
        let record = parse_profile("<html><body><h1>Jane Doe</h1></body></html>");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.headline, "");
        assert_eq!(record.about, "");
    }

    #[test]
    fn test_about_requires_the_about_section() {
        // The see-more element outside the about landmark must not match
        let markup = r#"<div class="pv-shared-text-with-see-more">stray</div>"#;
        assert_eq!(parse_profile(markup).about, "");
    }

    #[test]
    fn test_normalize_relative_address() {
        assert_eq!(
            normalize_profile_url("in/janedoe"),
            "https://www.linkedin.com/in/janedoe"
        );
        assert_eq!(
            normalize_profile_url("/in/janedoe"),
            "https://www.linkedin.com/in/janedoe"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_profile_url("janedoe");
        assert_eq!(normalize_profile_url(&once), once);
        assert_eq!(
            normalize_profile_url("https://www.linkedin.com/in/johnsmith"),
            "https://www.linkedin.com/in/johnsmith"
        );
    }
}
