//! LinkedIn authentication and authenticated fetching.
//!
//! This module implements the browser-shaped login handshake against
//! LinkedIn's web login flow (CSRF token extraction, form submit, session
//! cookie acquisition), classifies the outcome, and exposes a fetch gated on
//! login state. Everything hangs off [`LinkedInSession`], one instance per
//! user session — there is no process-wide state.

mod credentials;
mod endpoints;
mod error;
mod fetch;
mod login;
mod outcome;
mod session;
mod state;

pub use credentials::Credentials;
pub use endpoints::Endpoints;
pub use error::{AuthError, FetchError};
pub use outcome::{Challenge, LoginOutcome, classify_login_response};
pub use session::{CONNECT_TIMEOUT_SECS, LinkedInSession, REQUEST_TIMEOUT_SECS};
pub use state::AuthStatus;
