//! LinkedIn endpoint set used by the login handshake and authenticated fetch.
//!
//! Bundling the endpoints behind one type keeps the wire targets in a single
//! place and lets integration tests point the whole flow at a local mock
//! server instead of linkedin.com.

use url::Url;

/// Path of the HTML login form.
const LOGIN_PATH: &str = "/login";

/// Path credentials are POSTed to.
const LOGIN_SUBMIT_PATH: &str = "/checkpoint/lg/login-submit";

/// Base and derived URLs for the LinkedIn web login flow.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Endpoints for the real linkedin.com.
    ///
    /// # Panics
    ///
    /// Panics if the static base URL fails to parse. This should never
    /// happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn linkedin() -> Self {
        Self {
            base: Url::parse("https://www.linkedin.com")
                .expect("static LinkedIn base URL is valid"),
        }
    }

    /// Endpoints rooted at an arbitrary base URL (mock servers in tests).
    ///
    /// # Errors
    ///
    /// Returns the parse error when `base` is not a valid absolute URL.
    pub fn from_base(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(base)?,
        })
    }

    /// URL of the HTML login form (GET).
    ///
    /// # Panics
    ///
    /// Panics if the static path fails to join onto the base URL, which
    /// cannot happen for an absolute base.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn login_page(&self) -> Url {
        self.base
            .join(LOGIN_PATH)
            .expect("static login path joins onto base URL")
    }

    /// URL credentials are POSTed to.
    ///
    /// # Panics
    ///
    /// Panics if the static path fails to join onto the base URL, which
    /// cannot happen for an absolute base.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn login_submit(&self) -> Url {
        self.base
            .join(LOGIN_SUBMIT_PATH)
            .expect("static submit path joins onto base URL")
    }

    /// Referer sent with authenticated fetches (site root).
    #[must_use]
    pub fn referer(&self) -> &Url {
        &self.base
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::linkedin()
    }
}
