//! Browser implementation of [`SessionGateway`].
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with session cookies
//! sent on every call except registration.
//! Native builds: every call fails with a network error, since the endpoints
//! are only meaningful from a browser origin.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are folded through `classify_failure`; transport and
//! decode failures become `GatewayError::Network`. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use portal_session::gateway::{GatewayError, SessionGateway};
use portal_session::types::{ProfileUpdate, User};

use crate::config::ApiConfig;

#[cfg(not(feature = "csr"))]
const BROWSER_ONLY: &str = "not available outside the browser";

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// HTTP method plus endpoint for one gateway call.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub with_credentials: bool,
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) mod routes {
    use super::{Endpoint, Method};
    use portal_session::types::endpoints;

    pub const PROBE: Endpoint = Endpoint { method: Method::Get, path: endpoints::USER, with_credentials: true };
    pub const LOGIN: Endpoint = Endpoint { method: Method::Post, path: endpoints::LOGIN, with_credentials: true };
    pub const REGISTER: Endpoint = Endpoint { method: Method::Post, path: endpoints::REGISTER, with_credentials: false };
    pub const LOGOUT: Endpoint = Endpoint { method: Method::Post, path: endpoints::LOGOUT, with_credentials: true };
    pub const UPDATE: Endpoint = Endpoint { method: Method::Put, path: endpoints::USER, with_credentials: true };
}

/// Gateway backed by `fetch` through `gloo-net`.
#[derive(Clone, Debug, Default)]
pub struct HttpSessionGateway {
    config: ApiConfig,
}

impl HttpSessionGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use portal_session::gateway::{GatewayError, classify_failure, is_success};
    use portal_session::types::User;
    use serde::Serialize;
    use web_sys::RequestCredentials;

    use super::{Endpoint, Method};
    use crate::config::ApiConfig;

    fn builder(config: &ApiConfig, endpoint: Endpoint) -> RequestBuilder {
        let url = config.url(endpoint.path);
        let builder = match endpoint.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };
        if endpoint.with_credentials {
            builder.credentials(RequestCredentials::Include)
        } else {
            builder
        }
    }

    fn network(err: &gloo_net::Error) -> GatewayError {
        GatewayError::Network(err.to_string())
    }

    /// Send `endpoint` with an optional JSON body and check the status.
    pub(super) async fn send<B: Serialize>(
        config: &ApiConfig,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<Response, GatewayError> {
        let builder = builder(config, endpoint);
        let resp = match body {
            Some(body) => builder.json(body).map_err(|e| network(&e))?.send().await,
            None => builder.send().await,
        }
        .map_err(|e| network(&e))?;

        let status = resp.status();
        if is_success(status) {
            return Ok(resp);
        }
        let text = resp.text().await.unwrap_or_default();
        log::debug!("gateway: {} {} -> {status}", endpoint.method.as_str(), endpoint.path);
        Err(classify_failure(status, &text))
    }

    pub(super) async fn user(resp: Response) -> Result<User, GatewayError> {
        resp.json::<User>().await.map_err(|e| network(&e))
    }
}

#[async_trait::async_trait(?Send)]
impl SessionGateway for HttpSessionGateway {
    async fn probe(&self) -> Result<User, GatewayError> {
        #[cfg(feature = "csr")]
        {
            let resp = browser::send::<()>(&self.config, routes::PROBE, None).await?;
            browser::user(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(GatewayError::Network(BROWSER_ONLY.to_owned()))
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, GatewayError> {
        #[cfg(feature = "csr")]
        {
            let body = portal_session::types::LoginRequest { email: email.to_owned(), password: password.to_owned() };
            let resp = browser::send(&self.config, routes::LOGIN, Some(&body)).await?;
            browser::user(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(GatewayError::Network(BROWSER_ONLY.to_owned()))
        }
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), GatewayError> {
        #[cfg(feature = "csr")]
        {
            let body = portal_session::types::RegisterRequest {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            };
            browser::send(&self.config, routes::REGISTER, Some(&body)).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, email, password);
            Err(GatewayError::Network(BROWSER_ONLY.to_owned()))
        }
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        #[cfg(feature = "csr")]
        {
            browser::send::<()>(&self.config, routes::LOGOUT, None).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(GatewayError::Network(BROWSER_ONLY.to_owned()))
        }
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, GatewayError> {
        #[cfg(feature = "csr")]
        {
            let resp = browser::send(&self.config, routes::UPDATE, Some(update)).await?;
            browser::user(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = update;
            Err(GatewayError::Network(BROWSER_ONLY.to_owned()))
        }
    }
}
