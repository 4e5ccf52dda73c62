//! Authentication state machine and its read-only snapshot.
//!
//! One [`AuthState`] lives inside each [`LinkedInSession`](super::LinkedInSession).
//! Invariant: `logged_in == true` implies the error is clear and a username is
//! present. Every failure path leaves the state as "not logged in, error set"
//! so the caller can retry with `set_credentials` + `authenticate`.

use std::fmt;

use serde::Serialize;

use super::Credentials;

/// Mutable per-session authentication state.
///
/// The password is redacted in Debug output.
#[derive(Default)]
pub(crate) struct AuthState {
    logged_in: bool,
    username: Option<String>,
    password: Option<String>,
    error: Option<String>,
}

impl AuthState {
    /// Stores a validated credential pair and clears any previous error.
    pub(crate) fn store_credentials(&mut self, credentials: Credentials) {
        self.username = Some(credentials.username().to_string());
        self.password = Some(credentials.password().to_string());
        self.error = None;
    }

    /// Resets to the initial state. Always succeeds.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the stored credential pair, only when both halves are present.
    pub(crate) fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }

    /// Marks the session authenticated and discards the in-memory password.
    ///
    /// The username is kept so callers can show who is logged in.
    pub(crate) fn complete_login(&mut self) {
        debug_assert!(
            self.username.is_some(),
            "login cannot complete without a stored username"
        );
        self.logged_in = true;
        self.error = None;
        self.password = None;
    }

    /// Records a failure and discards the in-memory password.
    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.logged_in = false;
        self.error = Some(message.into());
        self.password = None;
    }

    /// Records a failure but keeps stored credentials, so the caller can
    /// retry `authenticate` without re-entering them.
    pub(crate) fn fail_keeping_credentials(&mut self, message: impl Into<String>) {
        self.logged_in = false;
        self.error = Some(message.into());
    }

    pub(crate) fn logged_in(&self) -> bool {
        self.logged_in
    }

    /// Username of the authenticated user; `None` unless logged in.
    pub(crate) fn authenticated_username(&self) -> Option<&str> {
        if self.logged_in {
            self.username.as_deref()
        } else {
            None
        }
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Read-only snapshot for the route layer.
    pub(crate) fn status(&self) -> AuthStatus {
        AuthStatus {
            authenticated: self.logged_in,
            username: self.authenticated_username().map(ToString::to_string),
            error: self.error.clone(),
        }
    }
}

// Custom Debug impl that redacts the password.
impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("logged_in", &self.logged_in)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("error", &self.error)
            .finish()
    }
}

/// Serializable view of the authentication state.
///
/// This is the shape JSON route handlers return to the UI: whether a session
/// is active, for whom, and the last human-readable error if not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthStatus {
    /// True only after a successful login.
    pub authenticated: bool,
    /// Username of the authenticated user; `None` unless authenticated.
    pub username: Option<String>,
    /// Last authentication or fetch error, if any.
    pub error: Option<String>,
}
