//! Shared browser headers for LinkedIn HTTP traffic.
//!
//! LinkedIn's login flow is an HTML form, not a documented API; requests that
//! do not look like they come from a browser are rejected or challenged.
//! Single source for the header values so login and fetch traffic stay
//! consistent and easy to update.

/// Browser User-Agent sent with every LinkedIn request.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// Browser Accept header for HTML page requests.
pub(crate) const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Browser Accept-Language header.
pub(crate) const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
