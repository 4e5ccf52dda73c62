//! CLI argument definitions using clap derive macros.

use clap::Parser;

use prospector_core::REQUEST_TIMEOUT_SECS;

/// Fetch LinkedIn pages with an authenticated session.
///
/// Prospector logs into LinkedIn with the credentials from the LINKEDIN_EMAIL
/// and LINKEDIN_PASSWORD environment variables and fetches the given URLs
/// with the resulting session cookies. The password is read from the
/// environment only, never from a flag.
#[derive(Parser, Debug)]
#[command(name = "prospector")]
#[command(author, version, about)]
pub struct Args {
    /// LinkedIn URLs to fetch with the authenticated session
    pub urls: Vec<String>,

    /// LinkedIn account email (overrides the LINKEDIN_EMAIL environment variable)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Print the authentication status as JSON after the login attempt
    #[arg(long)]
    pub status_json: bool,

    /// Total request timeout in seconds (1-300)
    #[arg(short = 't', long, default_value_t = REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=300))]
    pub timeout: u64,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["prospector"]).unwrap();
        assert!(args.urls.is_empty());
        assert!(args.email.is_none());
        assert!(!args.status_json);
        assert_eq!(args.timeout, REQUEST_TIMEOUT_SECS);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_urls_are_positional() {
        let args = Args::try_parse_from([
            "prospector",
            "https://www.linkedin.com/company/acme/",
            "www.linkedin.com/company/globex/",
        ])
        .unwrap();
        assert_eq!(args.urls.len(), 2);
    }

    #[test]
    fn test_cli_email_flag() {
        let args = Args::try_parse_from(["prospector", "-e", "user@example.com"]).unwrap();
        assert_eq!(args.email.as_deref(), Some("user@example.com"));

        let args = Args::try_parse_from(["prospector", "--email", "user@example.com"]).unwrap();
        assert_eq!(args.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_cli_no_password_flag_exists() {
        // The password must never be accepted on the command line.
        let result = Args::try_parse_from(["prospector", "--password", "secret"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["prospector", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["prospector", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["prospector", "-q"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_timeout_flag() {
        let args = Args::try_parse_from(["prospector", "-t", "15"]).unwrap();
        assert_eq!(args.timeout, 15);
    }

    #[test]
    fn test_cli_timeout_zero_rejected() {
        let result = Args::try_parse_from(["prospector", "-t", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_timeout_over_max_rejected() {
        let result = Args::try_parse_from(["prospector", "-t", "301"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_status_json_flag() {
        let args = Args::try_parse_from(["prospector", "--status-json"]).unwrap();
        assert!(args.status_json);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        // --help causes early exit, so we check it returns an error with Help kind
        let result = Args::try_parse_from(["prospector", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_flag_shows_version() {
        let result = Args::try_parse_from(["prospector", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["prospector", "--invalid-flag"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
