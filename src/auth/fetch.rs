//! Authenticated page fetching.
//!
//! Fetches reuse the session client, so the post-login cookies ride along
//! automatically. Calls are gated on login state: a logged-out session makes
//! no network call at all.

use tracing::{info, warn};
use url::Url;

use super::{FetchError, LinkedInSession};

impl LinkedInSession {
    /// Fetches a LinkedIn URL with the authenticated session.
    ///
    /// Returns the page body on HTTP 200, `None` otherwise. Failures are
    /// logged, never raised; a logged-out session returns `None` without
    /// issuing a request. URLs without a scheme are normalized to `https`.
    pub async fn fetch_authenticated(&self, url: &str) -> Option<String> {
        match self.fetch(url).await {
            Ok(body) => Some(body),
            Err(FetchError::NotAuthenticated) => {
                warn!("cannot fetch URL with auth - not logged in");
                None
            }
            Err(error) => {
                warn!(url, error = %error, "authenticated fetch failed");
                None
            }
        }
    }

    /// Typed form of [`fetch_authenticated`](Self::fetch_authenticated).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotAuthenticated`] when the session is logged
    /// out (no request is made), [`FetchError::InvalidUrl`] for unparseable
    /// URLs, [`FetchError::LoginRedirect`] when the response lands on a login
    /// page (expired session cookies), [`FetchError::HttpStatus`] for non-200
    /// responses, and [`FetchError::Network`]/[`FetchError::Timeout`] for
    /// transport failures.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if !self.is_authenticated() {
            return Err(FetchError::NotAuthenticated);
        }

        let normalized = normalize_scheme(url);
        let requested =
            Url::parse(&normalized).map_err(|_| FetchError::invalid_url(normalized.clone()))?;

        let response = self
            .client()
            .get(requested.clone())
            .header(reqwest::header::REFERER, self.endpoints().referer().as_str())
            .send()
            .await
            .map_err(|e| FetchError::transport(&normalized, e))?;

        let final_url = response.url().clone();
        if final_url != requested && is_login_page(&final_url) {
            return Err(FetchError::LoginRedirect { url: normalized });
        }

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(&normalized, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(&normalized, e))?;
        info!(url = %normalized, bytes = body.len(), "fetched authenticated URL");
        Ok(body)
    }
}

/// Prefixes scheme-less URLs with `https://`.
fn normalize_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// True when a redirect target is one of LinkedIn's login pages.
fn is_login_page(url: &Url) -> bool {
    let path = url.path();
    path.contains("uas/login") || path == "/login"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scheme_adds_https() {
        assert_eq!(
            normalize_scheme("www.linkedin.com/company/acme"),
            "https://www.linkedin.com/company/acme"
        );
    }

    #[test]
    fn test_normalize_scheme_keeps_existing_schemes() {
        assert_eq!(
            normalize_scheme("http://127.0.0.1:8080/page"),
            "http://127.0.0.1:8080/page"
        );
        assert_eq!(
            normalize_scheme("https://www.linkedin.com/feed/"),
            "https://www.linkedin.com/feed/"
        );
    }

    #[test]
    fn test_login_page_detection() {
        let login = Url::parse("https://www.linkedin.com/uas/login?session_redirect=%2Ffeed").unwrap();
        assert!(is_login_page(&login));
        let plain_login = Url::parse("https://www.linkedin.com/login").unwrap();
        assert!(is_login_page(&plain_login));
        let company = Url::parse("https://www.linkedin.com/company/acme/").unwrap();
        assert!(!is_login_page(&company));
    }

    #[tokio::test]
    async fn test_fetch_gated_when_logged_out() {
        let session = LinkedInSession::new();
        let result = session.fetch("https://www.linkedin.com/company/acme/").await;
        assert!(matches!(result, Err(FetchError::NotAuthenticated)));
        assert!(
            session
                .fetch_authenticated("https://www.linkedin.com/company/acme/")
                .await
                .is_none()
        );
    }
}
