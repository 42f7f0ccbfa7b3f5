//! HTTP transport seam.
//!
//! DESIGN
//! ======
//! The request layer only needs "POST this JSON to that path and hand me the
//! status and body". `HttpClient` captures that contract so the auth flow can
//! run against `BrowserClient` in the browser and a scripted client in tests.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with credentials
//! included so the browser cookie jar carries the server session.
//! Server-side (SSR) and native builds: calls fail with a `TransportError`
//! since these endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde_json::Value;

/// Failure to obtain any HTTP response at all (network, CORS, encoding).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Status and decoded body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// JSON body; `Value::Null` when empty, `Value::String` when not JSON.
    pub body: Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP capability the auth request layer is written against.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    /// Send `body` as JSON to `path` and return whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` only when no response was received. Non-2xx
    /// statuses are successful exchanges from the transport's point of view.
    async fn post(&self, path: &str, body: &Value) -> Result<HttpResponse, TransportError>;

    /// Fetch `path` with a GET request.
    ///
    /// # Errors
    ///
    /// Same contract as [`HttpClient::post`].
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError>;
}

/// `fetch`-backed client rooted at the API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserClient {
    base_url: String,
}

impl BrowserClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

impl HttpClient for BrowserClient {
    async fn post(&self, path: &str, body: &Value) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .json(body)
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            read_response(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(TransportError(UNAVAILABLE.to_owned()))
        }
    }

    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            read_response(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(TransportError(UNAVAILABLE.to_owned()))
        }
    }
}

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "not available on server";

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<HttpResponse, TransportError> {
    let status = resp.status();
    let text = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
    Ok(HttpResponse { status, body: parse_body(&text) })
}

/// Decode a response body leniently: empty → `Null`, invalid JSON → the raw text.
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => Value::String(text.to_owned()),
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
