//! Retry controller
//!
//! Wraps page fetches in a bounded retry loop with session repair. Both the
//! profile path and the company-research path go through the same wrapper,
//! so a login-wall redirect or a dead renderer is handled identically.

use tokio::time::sleep;

use crate::browser::fetch::{normalize_profile_url, parse_profile};
use crate::browser::session::Navigator;
use crate::core::{ProfileRecord, RetryPolicy, ScrapeConfig};
use std::time::Duration;

/// Fetch the rendered markup of a page, retrying up to the policy bound.
///
/// Before each attempt the session is probed and, when invalid, replaced
/// exactly once; a failed replacement aborts immediately since a browser
/// that cannot launch will not launch on the next attempt either.
/// Returns `None` after the bound is exhausted.
pub async fn page_with_retry<N: Navigator>(
    nav: &mut N,
    url: &str,
    settle: Duration,
    policy: &RetryPolicy,
) -> Option<String> {
    for attempt in 1..=policy.max_attempts {
        if !nav.is_valid().await {
            if let Err(e) = nav.refresh().await {
                eprintln!("Could not recreate browser session: {}", e);
                return None;
            }
        }

        let result = async {
            nav.goto(url).await?;
            sleep(settle).await;
            nav.content().await
        }
        .await;

        match result {
            Ok(markup) => return Some(markup),
            Err(e) => {
                if attempt < policy.max_attempts {
                    sleep(policy.backoff()).await;
                } else {
                    eprintln!(
                        "Failed to fetch {} after {} attempts: {}",
                        url, policy.max_attempts, e
                    );
                }
            }
        }
    }
    None
}

/// Fetch and extract one profile with the bounded retry policy applied.
///
/// Extraction itself cannot fail (missing elements fail soft to empty
/// fields), so every retryable fault is a navigation or session fault.
pub async fn fetch_profile_with_retry<N: Navigator>(
    nav: &mut N,
    address: &str,
    scrape: &ScrapeConfig,
) -> Option<ProfileRecord> {
    let url = normalize_profile_url(address);
    let markup = page_with_retry(nav, &url, scrape.settle(), &scrape.retry).await?;
    Some(parse_profile(&markup))
}
