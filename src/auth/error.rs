//! Error types for the authentication module.
//!
//! Login failures split into two layers: [`AuthError`] covers conditions that
//! prevent the handshake from completing (missing credentials, unreadable
//! login form, transport failures), while response classification lives in
//! [`LoginOutcome`](super::LoginOutcome). Fetch failures get their own
//! [`FetchError`] so callers can tell a gated call from a network problem.

use thiserror::Error;

/// Errors that can occur while performing the LinkedIn login handshake.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password was empty when storing credentials.
    #[error("Empty credentials provided")]
    EmptyCredentials,

    /// `authenticate` was called without stored credentials.
    #[error("No credentials provided")]
    MissingCredentials,

    /// The login page did not contain the expected CSRF hidden field.
    ///
    /// Usually means LinkedIn changed its login markup, or served a
    /// challenge page instead of the form.
    #[error("LinkedIn login form could not be processed")]
    LoginFormUnreadable,

    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error during {stage}: {source}")]
    Network {
        /// Which handshake step failed.
        stage: &'static str,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout during {stage}")]
    Timeout {
        /// Which handshake step timed out.
        stage: &'static str,
    },
}

impl AuthError {
    /// Creates a transport error for a handshake stage, mapping reqwest
    /// timeouts to the dedicated variant.
    pub(crate) fn transport(stage: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { stage }
        } else {
            Self::Network { stage, source }
        }
    }

    /// True when the error came from the network rather than from input or
    /// page structure.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

/// Errors that can occur during an authenticated page fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The session is not logged in; no request was made.
    #[error("not authenticated with LinkedIn")]
    NotAuthenticated,

    /// The provided URL is malformed or invalid.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// Network-level error issuing the request.
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed to fetch.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The request was redirected to a login page, meaning the session
    /// cookies are no longer honored.
    #[error("redirected to login page fetching {url}; session expired")]
    LoginRedirect {
        /// The URL whose fetch landed on a login page.
        url: String,
    },
}

impl FetchError {
    /// Creates a transport error for a fetch, mapping reqwest timeouts to the
    /// dedicated variant.
    pub(crate) fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        let url = url.into();
        if source.is_timeout() {
            Self::Timeout { url }
        } else {
            Self::Network { url, source }
        }
    }

    /// Creates an invalid URL error.
    pub(crate) fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub(crate) fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_fixed_messages() {
        // The route layer surfaces these strings verbatim; they must not drift.
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "No credentials provided"
        );
        assert_eq!(
            AuthError::LoginFormUnreadable.to_string(),
            "LinkedIn login form could not be processed"
        );
        assert_eq!(
            AuthError::EmptyCredentials.to_string(),
            "Empty credentials provided"
        );
    }

    #[test]
    fn test_auth_error_timeout_display_names_stage() {
        let error = AuthError::Timeout {
            stage: "credential submit",
        };
        let msg = error.to_string();
        assert!(msg.contains("timeout"), "expected 'timeout' in: {msg}");
        assert!(
            msg.contains("credential submit"),
            "expected stage in: {msg}"
        );
        assert!(error.is_transport());
        assert!(!AuthError::LoginFormUnreadable.is_transport());
    }

    #[test]
    fn test_fetch_error_http_status_display() {
        let error = FetchError::http_status("https://www.linkedin.com/company/acme", 403);
        let msg = error.to_string();
        assert!(msg.contains("403"), "expected '403' in: {msg}");
        assert!(msg.contains("/company/acme"), "expected URL in: {msg}");
    }

    #[test]
    fn test_fetch_error_login_redirect_display() {
        let error = FetchError::LoginRedirect {
            url: "https://www.linkedin.com/company/acme".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("login"), "expected 'login' in: {msg}");
        assert!(msg.contains("session expired"), "expected hint in: {msg}");
    }
}
