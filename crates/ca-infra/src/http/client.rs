use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use ca_core::ports::SessionStorePort;
use ca_core::{ApiEnvelope, ApiError, SessionCookies};
use reqwest::header::{HeaderMap, ACCEPT, COOKIE, SET_COOKIE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Cookie holding the double-submit CSRF token set next to the access cookie.
pub const CSRF_COOKIE: &str = "csrf_access_token";
/// Header the backend expects the CSRF token in on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// HTTP client for the backend API.
///
/// Replays the stored session cookies on every request and writes
/// `Set-Cookie` answers back to the session store, so the store is the only
/// place session material lives.
///
/// 后端 API 的 HTTP 客户端，会话 cookie 由 SessionStorePort 统一保存。
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
    session_store: Arc<dyn SessionStorePort>,
}

impl HttpApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        session_store: Arc<dyn SessionStorePort>,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_data::<(), T>(Method::GET, path, None).await
    }

    /// Send a request and decode `data` into `T`.
    pub async fn request_data<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(method, path, body).await?.decode::<T>()?.into_data()
    }

    /// Send a request whose `data` carries nothing the caller needs.
    /// Returns the backend's message.
    pub async fn request_ack<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<String>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, body).await?.into_ack()
    }

    /// Send a request and return the loosely typed envelope.
    ///
    /// Non-2xx answers become [`ApiError::Status`] carrying the envelope's
    /// message when the body has one.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<Value>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let cookies = self.load_cookies().await;

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");
        if let Some(cookie) = cookies.header_value() {
            request = request.header(COOKIE, cookie);
        }
        if method != Method::GET {
            if let Some(token) = cookies.get(CSRF_COOKIE) {
                request = request.header(CSRF_HEADER, token);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "sending API request");
        let response = request.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "API request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        self.capture_cookies(response.headers()).await;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(%method, %url, status = status.as_u16(), "API response received");

        decode_envelope(status, &text)
    }

    async fn load_cookies(&self) -> SessionCookies {
        match self.session_store.load().await {
            Ok(cookies) => cookies,
            Err(err) => {
                warn!(error = %err, "failed to load session cookies, sending none");
                SessionCookies::new()
            }
        }
    }

    async fn capture_cookies(&self, headers: &HeaderMap) {
        let set_cookies: Vec<&str> = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();
        if set_cookies.is_empty() {
            return;
        }

        let mut cookies = self.load_cookies().await;
        let mut changed = false;
        for header in set_cookies {
            changed |= cookies.apply_set_cookie(header);
        }
        if !changed {
            return;
        }

        let saved = if cookies.is_empty() {
            self.session_store.clear().await
        } else {
            self.session_store.save(&cookies).await
        };
        if let Err(err) = saved {
            warn!(error = %err, "failed to persist session cookies");
        }
    }
}

fn decode_envelope(status: StatusCode, body: &str) -> Result<ApiEnvelope<Value>, ApiError> {
    let envelope = serde_json::from_str::<ApiEnvelope<Value>>(body);

    if !status.is_success() {
        let message = envelope
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    envelope.map_err(|e| ApiError::Malformed(e.to_string()))
}
