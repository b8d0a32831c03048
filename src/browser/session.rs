//! Browser session manager
//!
//! Owns at most one live Chrome handle over CDP and repairs it on demand.
//! All other components borrow the session for one operation at a time;
//! the `&mut` receiver gives that mutual exclusion for free.

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use chromiumoxide::cdp::browser_protocol::network;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::core::{BrowserConfig, ProspectError, Result};

/// Navigation seam between the pipeline and the browser engine.
///
/// Production code drives a [`SessionManager`]; tests inject a scripted fake.
#[async_trait]
pub trait Navigator: Send {
    /// Direct the session to an address
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Read the rendered markup of the current page
    async fn content(&mut self) -> Result<String>;

    /// Side-effect-free liveness probe; any probe failure reads as `false`
    async fn is_valid(&self) -> bool;

    /// Replace a stale session with a fresh one.
    ///
    /// The old handle is shut down best-effort and never reused.
    async fn refresh(&mut self) -> Result<()>;

    /// Explicit shutdown at the end of a run
    async fn close(&mut self);
}

/// A live browser plus the page all navigation goes through
struct SessionHandle {
    browser: Browser,
    page: Page,
    event_loop: JoinHandle<()>,
}

/// Manages the single long-lived browser session
pub struct SessionManager {
    config: BrowserConfig,
    handle: Option<SessionHandle>,
}

impl SessionManager {
    /// Create a manager without launching anything yet.
    ///
    /// The session is constructed lazily on first use.
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            handle: None,
        }
    }

    /// Launch a session if none is cached
    pub async fn acquire(&mut self) -> Result<()> {
        if self.handle.is_some() {
            return Ok(());
        }

        let mut builder = ChromeConfig::builder()
            .no_sandbox()
            .args(vec![
                "--disable-dev-shm-usage",
                "--disable-notifications",
                "--disable-blink-features=AutomationControlled",
                "--start-maximized",
            ]);

        if self.config.headed {
            builder = builder.with_head();
        }

        let chrome_config = builder
            .build()
            .map_err(ProspectError::browser_init)?;

        let (browser, mut handler) = Browser::launch(chrome_config)
            .await
            .map_err(|e| ProspectError::browser_init(format!("failed to launch Chrome: {}", e)))?;

        // The handler stream must be drained for the browser to function.
        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ProspectError::browser_init(format!("failed to open page: {}", e)))?;

        // Outbound identification is overridden post-construction via CDP,
        // the one network-layer hook the engine exposes for it.
        let ua_params = network::SetUserAgentOverrideParams::builder()
            .user_agent(self.config.user_agent.as_str())
            .build()
            .map_err(ProspectError::browser_init)?;
        page.execute(ua_params)
            .await
            .map_err(|e| ProspectError::browser_init(format!("failed to set user agent: {}", e)))?;

        self.handle = Some(SessionHandle {
            browser,
            page,
            event_loop,
        });

        Ok(())
    }

    /// True when a handle has been launched (live or not)
    pub fn has_session(&self) -> bool {
        self.handle.is_some()
    }

    async fn ensure(&mut self) -> Result<&SessionHandle> {
        if self.handle.is_none() {
            self.acquire().await?;
        }
        self.handle.as_ref().ok_or(ProspectError::NoSession)
    }

    /// Best-effort shutdown; a session that already died cannot close cleanly
    async fn shutdown(handle: SessionHandle) {
        let SessionHandle {
            mut browser,
            page,
            event_loop,
        } = handle;
        let _ = page.close().await;
        let _ = browser.close().await;
        let _ = browser.wait().await;
        event_loop.abort();
    }
}

#[async_trait]
impl Navigator for SessionManager {
    async fn goto(&mut self, url: &str) -> Result<()> {
        let handle = self.ensure().await?;
        handle
            .page
            .goto(url)
            .await
            .map_err(|e| ProspectError::extract(format!("navigation to {} failed: {}", url, e)))?;
        Ok(())
    }

    async fn content(&mut self) -> Result<String> {
        let handle = self.ensure().await?;
        handle
            .page
            .content()
            .await
            .map_err(|e| ProspectError::extract(format!("failed to read page markup: {}", e)))
    }

    async fn is_valid(&self) -> bool {
        match &self.handle {
            Some(handle) => handle.page.url().await.is_ok(),
            None => false,
        }
    }

    async fn refresh(&mut self) -> Result<()> {
        if let Some(old) = self.handle.take() {
            Self::shutdown(old).await;
        }
        self.acquire().await
    }

    async fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            Self::shutdown(handle).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_session_before_first_use() {
        let manager = SessionManager::new(BrowserConfig::default());
        assert!(!manager.has_session());
        assert!(!manager.is_valid().await);
    }
}
