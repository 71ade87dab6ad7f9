//! Wire DTOs for the session backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly. Success bodies may carry extra
//! keys (`message`) that are ignored on decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Backend routes, relative to the configured base URL.
pub mod endpoints {
    /// `GET` probes the session, `PUT` updates the profile.
    pub const USER: &str = "/api/user";
    pub const LOGIN: &str = "/api/login";
    pub const REGISTER: &str = "/api/register";
    pub const LOGOUT: &str = "/api/logout";
}

/// Name of the cookie carrying the server-side session.
pub const SESSION_COOKIE: &str = "jwt";

/// The authenticated identity as returned by probe, login and profile update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend row id, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), email: email.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `PUT /api/user`.
///
/// A `None` password is left out of the JSON entirely so the backend keeps the
/// current one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Failure body. Login and register report under `message`, profile update
/// under `error`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse a raw response body, returning `None` for anything that is not a
    /// JSON object.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Backend-supplied text, preferring `message` over `error`. Blank values
    /// count as missing.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}
