//! Per-session HTTP transport and credential store.
//!
//! A [`LinkedInSession`] owns one reqwest client with a cookie jar, one set of
//! endpoints, and one [`AuthState`]. There is no process-wide state: a
//! multi-user deployment creates one session per user, and the borrow checker
//! enforces exclusive access to the mutating operations.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::cookie::Jar;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::{info, warn};

use super::{AuthStatus, Credentials, Endpoints, state::AuthState};
use crate::user_agent;

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default total request timeout (30 seconds). LinkedIn pages are small HTML
/// documents; anything slower than this is effectively down.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// An authenticated LinkedIn session: cookie-carrying HTTP client plus
/// credential and login state.
///
/// This client is designed to be created once per user session and reused for
/// the login handshake and all subsequent authenticated fetches, so the
/// post-login cookies accumulate in one jar.
///
/// # Example
///
/// ```no_run
/// use prospector_core::LinkedInSession;
///
/// # async fn example() {
/// let mut session = LinkedInSession::new();
/// session.set_credentials("user@example.com", "secret");
/// if session.authenticate().await {
///     let page = session
///         .fetch_authenticated("https://www.linkedin.com/company/acme/")
///         .await;
///     println!("fetched {} bytes", page.map_or(0, |p| p.len()));
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct LinkedInSession {
    client: Client,
    endpoints: Endpoints,
    connect_timeout_secs: u64,
    request_timeout_secs: u64,
    pub(super) state: AuthState,
}

impl Default for LinkedInSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedInSession {
    /// Creates a session against the real linkedin.com with default timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::linkedin())
    }

    /// Creates a session against arbitrary endpoints (mock servers in tests).
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self::with_timeouts(endpoints, CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS)
    }

    /// Creates a session with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_timeouts(
        endpoints: Endpoints,
        connect_timeout_secs: u64,
        request_timeout_secs: u64,
    ) -> Self {
        let client = build_client(connect_timeout_secs, request_timeout_secs)
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            endpoints,
            connect_timeout_secs,
            request_timeout_secs,
            state: AuthState::default(),
        }
    }

    /// Stores a credential pair for the next [`authenticate`](Self::authenticate)
    /// call. Does not attempt authentication itself and performs no I/O.
    ///
    /// Returns `false` (and records an error) when either value is empty.
    pub fn set_credentials(&mut self, username: &str, password: &str) -> bool {
        match Credentials::new(username, password) {
            Ok(credentials) => {
                info!(username = %credentials.username(), "LinkedIn credentials set");
                self.state.store_credentials(credentials);
                true
            }
            Err(error) => {
                warn!("empty LinkedIn credentials provided");
                self.state.fail_keeping_credentials(error.to_string());
                false
            }
        }
    }

    /// Clears stored credentials, login state, and the session cookie jar.
    /// Always succeeds.
    ///
    /// `reqwest::cookie::Jar` has no clear operation, so the client is rebuilt
    /// around a fresh jar.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to rebuild with the session's
    /// existing configuration. This should never happen in practice.
    #[allow(clippy::expect_used)]
    pub fn clear_credentials(&mut self) {
        self.state.clear();
        self.client = build_client(self.connect_timeout_secs, self.request_timeout_secs)
            .expect("failed to rebuild HTTP client with existing configuration");
        info!("LinkedIn credentials cleared");
    }

    /// True only after a successful login.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.logged_in()
    }

    /// Username of the authenticated user; `None` unless authenticated.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.state.authenticated_username()
    }

    /// Last authentication or fetch error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Serializable snapshot of the authentication state for route handlers.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.state.status()
    }

    /// Endpoints this session talks to.
    #[must_use]
    pub(super) fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Cookie-carrying HTTP client shared by login and fetch.
    #[must_use]
    pub(super) fn client(&self) -> &Client {
        &self.client
    }
}

/// Builds the session HTTP client: fresh cookie jar, browser default headers,
/// bounded timeouts, gzip decompression.
fn build_client(
    connect_timeout_secs: u64,
    request_timeout_secs: u64,
) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(user_agent::BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(user_agent::BROWSER_ACCEPT_LANGUAGE),
    );

    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(request_timeout_secs))
        .gzip(true)
        .user_agent(user_agent::BROWSER_USER_AGENT)
        .default_headers(headers)
        .cookie_provider(Arc::new(Jar::default()))
        .build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_logged_out() {
        let session = LinkedInSession::new();
        assert!(!session.is_authenticated());
        assert!(session.username().is_none());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_set_credentials_rejects_empty_pairs() {
        let mut session = LinkedInSession::new();
        assert!(!session.set_credentials("", "secret"));
        assert!(!session.set_credentials("user@example.com", ""));
        assert!(!session.set_credentials("", ""));
        assert!(!session.is_authenticated());
        assert_eq!(session.last_error(), Some("Empty credentials provided"));
    }

    #[test]
    fn test_set_credentials_stores_and_clears_error() {
        let mut session = LinkedInSession::new();
        assert!(!session.set_credentials("", ""));
        assert!(session.set_credentials("user@example.com", "secret"));
        assert!(session.last_error().is_none());
        // Still not authenticated until the handshake runs.
        assert!(!session.is_authenticated());
        assert!(session.username().is_none());
    }

    #[test]
    fn test_clear_credentials_resets_state() {
        let mut session = LinkedInSession::new();
        session.set_credentials("user@example.com", "secret");
        session.clear_credentials();
        assert!(!session.is_authenticated());
        assert!(session.username().is_none());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_status_snapshot_matches_accessors() {
        let mut session = LinkedInSession::new();
        session.set_credentials("", "");
        let status = session.status();
        assert!(!status.authenticated);
        assert_eq!(status.username, None);
        assert_eq!(status.error.as_deref(), session.last_error());
    }

    #[test]
    fn test_debug_never_exposes_password() {
        let mut session = LinkedInSession::new();
        session.set_credentials("user@example.com", "hunter2");
        let debug = format!("{session:?}");
        assert!(
            !debug.contains("hunter2"),
            "password must not appear in Debug output: {debug}"
        );
    }
}
