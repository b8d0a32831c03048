//! Browser module - session lifecycle, page fetch, and retry discipline

pub mod fetch;
pub mod retry;
pub mod session;

pub use fetch::{fetch_profile, normalize_profile_url, parse_profile, PROFILE_ROOT};
pub use retry::{fetch_profile_with_retry, page_with_retry};
pub use session::{Navigator, SessionManager};
