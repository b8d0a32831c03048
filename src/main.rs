//! Prospect - LinkedIn prospecting and outreach automation
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;

use prospect::browser::session::Navigator;
use prospect::cli::{read_url_column, wait_for_login, write_leads, write_messages};
use prospect::core::Config;
use prospect::{BatchRunner, ExecutiveSearch, GeminiClient, MessageComposer, SessionManager};

/// Prospect - LinkedIn prospecting and outreach automation
#[derive(Parser, Debug)]
#[command(name = "prospect")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a personalized outreach message per profile URL
    Messages {
        /// Input CSV with a 'URL' column
        #[arg(long, short)]
        input: PathBuf,

        /// Output CSV path
        #[arg(long, short, default_value = "messages.csv")]
        output: PathBuf,

        /// Skip the interactive login step (session already authenticated)
        #[arg(long)]
        no_login: bool,
    },

    /// Collect executive profile links for a named company
    Execs {
        /// Company name to search for
        #[arg(long, short)]
        company: String,

        /// Output CSV path
        #[arg(long, short, default_value = "execs.csv")]
        output: PathBuf,

        /// Skip the interactive login step
        #[arg(long)]
        no_login: bool,
    },

    /// Print the default configuration as TOML
    Config {
        /// Write it to the config file instead of printing
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load();

    if args.headed {
        config.browser.headed = true;
    }

    if args.debug {
        config.debug = true;
    }

    match args.command {
        Command::Messages {
            input,
            output,
            no_login,
        } => run_messages(config, &input, &output, no_login).await,
        Command::Execs {
            company,
            output,
            no_login,
        } => run_execs(config, &company, &output, no_login).await,
        Command::Config { write } => {
            if write {
                Config::default().save()?;
                println!("Wrote {}", Config::config_file().display());
            } else {
                println!("{}", Config::default_config_toml());
            }
            Ok(())
        }
    }
}

/// Build the composer, degrading to fallback-only when the API key is absent
fn build_composer(config: &Config) -> MessageComposer<GeminiClient> {
    let mut composer = match GeminiClient::from_config(&config.gemini) {
        Ok(client) => MessageComposer::new(client),
        Err(e) => {
            eprintln!("Gemini unavailable ({}), using fallback messages only", e);
            MessageComposer::fallback_only()
        }
    };
    composer.set_debug(config.debug);
    composer
}

/// Open the session, running the operator login step unless skipped
async fn open_session(config: &mut Config, no_login: bool) -> anyhow::Result<SessionManager> {
    if !no_login {
        // The human logs in inside the window, so it has to be visible.
        config.browser.headed = true;
    }

    let mut session = SessionManager::new(config.browser.clone());
    session
        .acquire()
        .await
        .context("Browser init failed, no session available")?;

    if !no_login {
        wait_for_login(&mut session).await?;
    }

    Ok(session)
}

async fn run_messages(
    mut config: Config,
    input: &std::path::Path,
    output: &std::path::Path,
    no_login: bool,
) -> anyhow::Result<()> {
    let urls = read_url_column(input)?;
    if urls.is_empty() {
        bail!("no profile URLs found in {}", input.display());
    }
    println!("Loaded {} profile URL(s) from {}", urls.len(), input.display());

    let composer = build_composer(&config);
    let mut session = open_session(&mut config, no_login).await?;

    let bar = ProgressBar::new(urls.len() as u64);
    let total = urls.len() as f64;
    let report = BatchRunner::new(&mut session, &composer, &config.scrape)
        .run(&urls, |fraction| {
            bar.set_position((fraction * total).round() as u64);
        })
        .await;
    bar.finish_and_clear();

    session.close().await;

    for failure in &report.failures {
        eprintln!("✗ {}: {}", failure.input, failure.reason);
    }

    if report.is_empty() {
        bail!(
            "no messages generated across {} input(s); check login and URLs",
            report.total
        );
    }

    write_messages(output, &report.messages)?;
    println!(
        "✓ Generated {} of {} message(s), written to {}",
        report.messages.len(),
        report.total,
        output.display()
    );

    Ok(())
}

async fn run_execs(
    mut config: Config,
    company: &str,
    output: &std::path::Path,
    no_login: bool,
) -> anyhow::Result<()> {
    let role_count = config.search.roles.len();
    println!(
        "Searching {} role keyword(s) for executives at {}",
        role_count, company
    );

    let mut session = open_session(&mut config, no_login).await?;

    let bar = ProgressBar::new(role_count as u64);
    let total = role_count as f64;
    let report = ExecutiveSearch::new(&mut session, &config.search)
        .run(company, |fraction| {
            bar.set_position((fraction * total).round() as u64);
        })
        .await;
    bar.finish_and_clear();

    session.close().await;

    for failure in &report.failures {
        eprintln!("✗ {}: {}", failure.input, failure.reason);
    }

    if report.is_empty() {
        bail!("no executives found for {}", company);
    }

    write_leads(output, &report.leads)?;
    println!(
        "✓ Found {} lead(s) across {} role(s), written to {}",
        report.leads.len(),
        report.total_roles,
        output.display()
    );

    Ok(())
}
