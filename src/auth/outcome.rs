//! Login response classification.
//!
//! LinkedIn's login submit is an HTML form endpoint, so the outcome has to be
//! inferred from where the response landed and what the body contains. The
//! heuristics are confined to [`classify_login_response`]; when LinkedIn
//! changes its markup only this function needs updating, and callers keep
//! pattern-matching [`LoginOutcome`].

use url::Url;

/// Path prefix of the member feed a successful login redirects to.
const FEED_PATH_PREFIX: &str = "/feed";

/// Result of a completed login exchange with LinkedIn.
///
/// Transport and protocol failures do not reach classification; they surface
/// as [`AuthError`](super::AuthError) from the handshake instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// LinkedIn accepted the credentials and issued session cookies.
    Success,
    /// LinkedIn wants an interactive verification step before granting access.
    ChallengeRequired(Challenge),
    /// LinkedIn is throttling login attempts from this client.
    RateLimited,
    /// The credentials were rejected. LinkedIn does not reliably distinguish
    /// a wrong password from other rejections in this flow.
    CredentialsRejected,
}

/// Kind of interactive verification LinkedIn demanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    /// Two-factor authentication code prompt.
    TwoFactor,
    /// Account security checkpoint page.
    SecurityCheckpoint,
    /// CAPTCHA verification page.
    Captcha,
}

impl LoginOutcome {
    /// True only for [`LoginOutcome::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Human-readable failure message for the state error field; `None` for
    /// success.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Success => None,
            Self::ChallengeRequired(Challenge::TwoFactor) => {
                Some("Two-factor authentication required")
            }
            Self::ChallengeRequired(Challenge::SecurityCheckpoint) => Some(
                "LinkedIn security checkpoint detected - please log in manually on LinkedIn.com first",
            ),
            Self::ChallengeRequired(Challenge::Captcha) => Some(
                "LinkedIn is requiring CAPTCHA verification - please log in manually on LinkedIn.com first",
            ),
            Self::RateLimited => Some("LinkedIn rate limiting detected - please try again later"),
            Self::CredentialsRejected => Some("Authentication failed (incorrect credentials)"),
        }
    }
}

/// Classifies a login submit response from its final URL (after redirects)
/// and body text.
///
/// Checks run in order of confidence: the feed redirect is the only positive
/// signal, then the known challenge markers, then rate limiting. Anything
/// unrecognized counts as a credential rejection — the safe default when
/// LinkedIn serves an unfamiliar page.
#[must_use]
pub fn classify_login_response(final_url: &Url, body: &str) -> LoginOutcome {
    let url_text = final_url.as_str();
    let url_lower = url_text.to_lowercase();
    let body_lower = body.to_lowercase();

    if final_url.path().starts_with(FEED_PATH_PREFIX)
        || url_text.contains("feed")
        || body.contains("feed")
    {
        return LoginOutcome::Success;
    }

    if url_text.contains("two-step-verification") || body.contains("two-step-verification") {
        return LoginOutcome::ChallengeRequired(Challenge::TwoFactor);
    }

    if url_text.contains("checkpoint") && url_text.contains("challenge") {
        return LoginOutcome::ChallengeRequired(Challenge::SecurityCheckpoint);
    }

    if url_lower.contains("captcha") || body_lower.contains("captcha") {
        return LoginOutcome::ChallengeRequired(Challenge::Captcha);
    }

    if url_lower.contains("rate") || url_lower.contains("limit") {
        return LoginOutcome::RateLimited;
    }

    LoginOutcome::CredentialsRejected
}
