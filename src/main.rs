//! CLI entry point for the prospector tool.

use anyhow::Result;
use clap::Parser;
use prospector_core::{CONNECT_TIMEOUT_SECS, Endpoints, LinkedInSession};
use tracing::{debug, info, warn};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Prospector starting");

    let mut session =
        LinkedInSession::with_timeouts(Endpoints::linkedin(), CONNECT_TIMEOUT_SECS, args.timeout);

    match resolve_credentials(args.email.as_deref()) {
        Some((email, password)) => {
            if session.set_credentials(&email, &password) && session.authenticate().await {
                info!(
                    username = session.username().unwrap_or_default(),
                    "LinkedIn authentication succeeded"
                );
            } else {
                warn!(
                    error = session.last_error().unwrap_or("unknown"),
                    "LinkedIn authentication failed"
                );
            }
        }
        None => {
            info!("No LinkedIn credentials provided.");
            info!("Set LINKEDIN_EMAIL and LINKEDIN_PASSWORD to enable authenticated fetching.");
        }
    }

    if args.status_json {
        println!("{}", serde_json::to_string_pretty(&session.status())?);
    }

    if args.urls.is_empty() {
        if !args.status_json {
            info!("No URLs provided. Pass LinkedIn URLs as arguments to fetch them.");
            info!("Example: prospector https://www.linkedin.com/company/acme/");
        }
        return Ok(());
    }

    let mut fetched = 0usize;
    let mut failed = 0usize;
    for url in &args.urls {
        match session.fetch_authenticated(url).await {
            Some(body) => {
                fetched += 1;
                println!("{body}");
            }
            None => failed += 1,
        }
    }

    info!(fetched, failed, total = args.urls.len(), "Fetch complete");

    Ok(())
}

/// Resolves the credential pair from the CLI flag and environment.
///
/// The email comes from `--email` or `LINKEDIN_EMAIL`; the password only ever
/// comes from `LINKEDIN_PASSWORD` so it cannot leak through process listings.
fn resolve_credentials(email_flag: Option<&str>) -> Option<(String, String)> {
    let email = email_flag
        .map(ToString::to_string)
        .or_else(|| std::env::var("LINKEDIN_EMAIL").ok())
        .filter(|value| !value.is_empty())?;
    let password = std::env::var("LINKEDIN_PASSWORD")
        .ok()
        .filter(|value| !value.is_empty())?;
    Some((email, password))
}
