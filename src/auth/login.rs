//! LinkedIn login handshake.
//!
//! The flow mirrors what a browser does on the login page: GET the form to
//! pick up baseline cookies and the CSRF hidden field, POST the credentials
//! with the token echoed back, then classify where the response landed. The
//! session cookie ends up in the client's jar as a side effect of the POST.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::REFERER;
use tracing::{error, info, warn};

use super::{AuthError, LinkedInSession, LoginOutcome, classify_login_response};

/// Handshake stage names used in transport error context.
const LOGIN_PAGE_STAGE: &str = "login page fetch";
const SUBMIT_STAGE: &str = "credential submit";

/// CSRF hidden field on the login form.
static CSRF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name="loginCsrfParam"\s+value="([^"]+)""#).expect("CSRF regex is valid") // Static pattern, safe to panic
});

/// Pulls the CSRF token out of the login page body.
fn extract_csrf_token(body: &str) -> Option<&str> {
    CSRF_PATTERN
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str())
}

impl LinkedInSession {
    /// Authenticates with LinkedIn using the stored credentials.
    ///
    /// Boolean form of [`login`](Self::login) for callers that only need the
    /// go/no-go answer; the detailed reason stays available through
    /// [`last_error`](Self::last_error). Never panics and never propagates a
    /// raw transport error.
    pub async fn authenticate(&mut self) -> bool {
        self.login().await.is_ok_and(|outcome| outcome.is_success())
    }

    /// Performs the login handshake and returns the classified outcome.
    ///
    /// State transitions happen here regardless of how the attempt ends:
    /// success marks the session authenticated and discards the password;
    /// classified failures and transport errors leave it logged out with the
    /// error recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] when no credential pair is
    /// stored (no network call is made), [`AuthError::LoginFormUnreadable`]
    /// when the CSRF field cannot be found (no credentials are submitted),
    /// and [`AuthError::Network`]/[`AuthError::Timeout`] for transport
    /// failures.
    pub async fn login(&mut self) -> Result<LoginOutcome, AuthError> {
        let result = self.perform_login().await;
        match &result {
            Ok(outcome) => match outcome.message() {
                None => {
                    self.state.complete_login();
                    info!(
                        username = self.username().unwrap_or_default(),
                        "authenticated with LinkedIn"
                    );
                }
                Some(message) => {
                    warn!(reason = message, "LinkedIn login rejected");
                    self.state.fail(message);
                }
            },
            Err(error) => self.record_login_error(error),
        }
        result
    }

    /// Protocol steps only; state transitions stay in [`login`](Self::login).
    async fn perform_login(&self) -> Result<LoginOutcome, AuthError> {
        let (username, password) = self
            .state
            .credentials()
            .map(|(username, password)| (username.to_string(), password.to_string()))
            .ok_or(AuthError::MissingCredentials)?;

        // Initial request establishes baseline cookies and carries the CSRF token.
        let login_page_url = self.endpoints().login_page();
        let response = self
            .client()
            .get(login_page_url.clone())
            .send()
            .await
            .map_err(|e| AuthError::transport(LOGIN_PAGE_STAGE, e))?;
        let page_body = response
            .text()
            .await
            .map_err(|e| AuthError::transport(LOGIN_PAGE_STAGE, e))?;

        let csrf_token = extract_csrf_token(&page_body).ok_or(AuthError::LoginFormUnreadable)?;

        let form = [
            ("session_key", username.as_str()),
            ("session_password", password.as_str()),
            ("loginCsrfParam", csrf_token),
        ];
        let response = self
            .client()
            .post(self.endpoints().login_submit())
            .header(REFERER, login_page_url.as_str())
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::transport(SUBMIT_STAGE, e))?;

        let final_url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::transport(SUBMIT_STAGE, e))?;

        Ok(classify_login_response(&final_url, &body))
    }

    /// Maps a handshake error onto the session state.
    fn record_login_error(&mut self, error: &AuthError) {
        match error {
            AuthError::MissingCredentials | AuthError::EmptyCredentials => {
                warn!("no LinkedIn credentials found");
                self.state.fail_keeping_credentials(error.to_string());
            }
            AuthError::LoginFormUnreadable => {
                error!("could not extract CSRF token from LinkedIn login page");
                // Credentials stay stored; the page may parse on a retry.
                self.state.fail_keeping_credentials(error.to_string());
            }
            AuthError::Network { .. } | AuthError::Timeout { .. } => {
                error!(error = %error, "error during LinkedIn authentication");
                self.state.fail(format!("Authentication error: {error}"));
            }
        }
    }
}
