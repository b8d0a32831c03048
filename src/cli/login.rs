//! Out-of-band login step
//!
//! Authentication happens by a human inside the visible browser window;
//! there is no programmatic login. The pipeline must tolerate the session
//! being pre- or post-authentication at any point, so this step only
//! parks the session on the login page and waits for the operator.

use std::io::{self, BufRead, Write};

use crate::browser::session::Navigator;
use crate::core::Result;

/// Address of the target site's login page
pub const LOGIN_URL: &str = "https://www.linkedin.com/login";

/// Navigate to the login page and block until the operator confirms.
pub async fn wait_for_login<N: Navigator>(nav: &mut N) -> Result<()> {
    nav.goto(LOGIN_URL).await?;

    println!("A browser window has opened on the LinkedIn login page.");
    println!("Log in there, then come back here.");
    print!("Press Enter when you are logged in... ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(())
}
