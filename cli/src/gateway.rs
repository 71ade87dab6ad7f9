//! `reqwest` implementation of [`SessionGateway`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend keeps the session in a `jwt` cookie. A cookie jar seeded from
//! `--session-token` plays the browser's role: it is sent with every call
//! except registration and picks up the cookie a login sets, so a shell
//! session stays signed in across commands.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use portal_session::gateway::{GatewayError, SessionGateway, classify_failure, join_url};
use portal_session::types::{LoginRequest, ProfileUpdate, RegisterRequest, SESSION_COOKIE, User, endpoints};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Method, RequestBuilder, Response};
use url::Url;

use crate::error::CliError;

pub struct ReqwestGateway {
    base: Url,
    jar: Arc<Jar>,
    with_cookies: reqwest::Client,
    without_cookies: reqwest::Client,
}

impl ReqwestGateway {
    /// Build a gateway for `base_url`, optionally resuming `session_token`.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidBaseUrl`] for a URL that does not parse, and
    /// [`CliError::Http`] when the HTTP client cannot be built.
    pub fn new(base_url: &str, session_token: Option<&str>) -> Result<Self, CliError> {
        let base = Url::parse(base_url).map_err(|e| CliError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        let jar = Arc::new(Jar::default());
        if let Some(token) = session_token.filter(|t| !t.trim().is_empty()) {
            jar.add_cookie_str(&format!("{SESSION_COOKIE}={}", token.trim()), &base);
        }
        let with_cookies = reqwest::Client::builder().cookie_provider(Arc::clone(&jar)).build()?;
        let without_cookies = reqwest::Client::builder().build()?;
        Ok(Self { base, jar, with_cookies, without_cookies })
    }

    /// Current value of the session cookie, if the jar holds one.
    pub fn session_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base)?;
        cookie_value(header.to_str().ok()?, SESSION_COOKIE)
    }

    fn request(&self, method: Method, path: &str, with_cookies: bool) -> RequestBuilder {
        let client = if with_cookies { &self.with_cookies } else { &self.without_cookies };
        client.request(method, join_url(self.base.as_str(), path))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request.send().await.map_err(|e| GatewayError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "gateway: request failed");
        Err(classify_failure(status.as_u16(), &body))
    }

    async fn user(response: Response) -> Result<User, GatewayError> {
        response.json::<User>().await.map_err(|e| GatewayError::Network(e.to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl SessionGateway for ReqwestGateway {
    async fn probe(&self) -> Result<User, GatewayError> {
        let response = self.send(self.request(Method::GET, endpoints::USER, true)).await?;
        Self::user(response).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, GatewayError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let response = self.send(self.request(Method::POST, endpoints::LOGIN, true).json(&body)).await?;
        Self::user(response).await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), GatewayError> {
        let body = RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() };
        self.send(self.request(Method::POST, endpoints::REGISTER, false).json(&body)).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        self.send(self.request(Method::POST, endpoints::LOGOUT, true)).await?;
        Ok(())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, GatewayError> {
        let response = self.send(self.request(Method::PUT, endpoints::USER, true).json(update)).await?;
        Self::user(response).await
    }
}

/// Value of cookie `name` in a `Cookie` header (`a=1; b=2`).
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}
