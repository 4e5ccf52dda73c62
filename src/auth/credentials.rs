//! Credential pair validation and in-memory handling.
//!
//! Credentials live in memory only: they are never written to disk, logs, or
//! any service other than LinkedIn's own login endpoint. The password is held
//! just long enough to complete an authentication attempt and is dropped on
//! every login success and on classified failures.

use std::fmt;

use super::AuthError;

/// A validated LinkedIn username/password pair.
///
/// The password field is intentionally redacted in Debug output to prevent
/// accidental logging of sensitive data.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Validates and stores a credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyCredentials`] when either field is empty.
    pub fn new(username: &str, password: &str) -> Result<Self, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Returns the username (LinkedIn email).
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// The password is sensitive — never log the return value.
    #[must_use]
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

// Custom Debug impl that redacts the password.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
