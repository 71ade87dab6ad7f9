//! Network seam between the coordinator and the session backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each front end implements [`SessionGateway`] with its own HTTP stack
//! (`gloo-net` in the browser, `reqwest` in the CLI). Implementations are pure
//! translation layers: one request per call, no retries, no session state.
//! Status codes are folded into [`GatewayError`] by [`classify_failure`] so
//! every implementation reports failures identically.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use crate::types::{ErrorBody, ProfileUpdate, User};

/// Failure outcome of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// 401. For a probe this just means "not logged in".
    #[error("unauthorized")]
    Unauthorized,
    /// Any other 4xx, with the backend message when the body carried one.
    #[error("client error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Client { status: u16, message: Option<String> },
    /// 5xx, or a status outside the success and client ranges.
    #[error("server error {status}")]
    Server { status: u16 },
    /// Transport failure: unreachable host, aborted request, undecodable body.
    #[error("network error: {0}")]
    Network(String),
}

impl GatewayError {
    /// Backend-provided message carried by a client error, if any.
    #[must_use]
    pub fn client_message(&self) -> Option<&str> {
        match self {
            Self::Client { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Backend operations used by the session coordinator.
///
/// Futures are not required to be `Send`: the browser implementation runs on
/// the single-threaded UI event loop.
#[async_trait::async_trait(?Send)]
pub trait SessionGateway {
    /// `GET /api/user` with session cookies.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Unauthorized`] when no session exists; other variants on failure.
    async fn probe(&self) -> Result<User, GatewayError>;

    /// `POST /api/login` with session cookies.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Unauthorized`] on bad credentials; other variants on failure.
    async fn login(&self, email: &str, password: &str) -> Result<User, GatewayError>;

    /// `POST /api/register` without cookies.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Client`] on backend validation failure; other variants on failure.
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), GatewayError>;

    /// `POST /api/logout` with session cookies.
    ///
    /// # Errors
    ///
    /// Any non-2xx status or transport failure.
    async fn logout(&self) -> Result<(), GatewayError>;

    /// `PUT /api/user` with session cookies.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Client`] on invalid input; other variants on failure.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, GatewayError>;
}

/// Map a non-success HTTP status and its raw body onto [`GatewayError`].
#[must_use]
pub fn classify_failure(status: u16, body: &str) -> GatewayError {
    match status {
        401 => GatewayError::Unauthorized,
        400..=499 => GatewayError::Client {
            status,
            message: ErrorBody::parse(body).and_then(|b| b.text().map(str::to_owned)),
        },
        _ => GatewayError::Server { status },
    }
}

/// True for 2xx statuses.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Join a configured base URL and an endpoint path.
///
/// An empty base yields the bare path (same-origin requests).
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
