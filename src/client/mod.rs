//! HTTP transport: a single wrapper around `reqwest` through which every
//! API call flows.
//!
//! Each call attaches `Content-Type: application/json` and, when one is
//! stored, an `Authorization: Bearer <token>` header. The token is read
//! fresh from the session store on every call, never cached in memory.
//! Non-2xx responses are normalized into [`ClientError::Api`] with the
//! body's `message` field when present, else `Error: <status>`.

pub mod decode;
pub mod paths;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::SessionStore;
use crate::config::ClientConfig;
use crate::errors::ClientError;

pub use decode::{decode_list, decode_record};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// The shared API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    pub async fn get(&self, path: &str) -> Result<Option<Value>, ClientError> {
        self.send::<()>(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// POST with no body (logout and friends).
    pub async fn post_empty(&self, path: &str) -> Result<Option<Value>, ClientError> {
        self.send::<()>(Method::POST, path, None).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Option<Value>, ClientError> {
        self.send::<()>(Method::DELETE, path, None).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<Value>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "sending API request");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");

        // Read the token fresh from durable storage on every call.
        if let Some(token) = self.store.token() {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(status = %status, error = %e, "success response body is not JSON");
                Ok(None)
            }
        }
    }
}

fn api_error(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("Error: {}", status.as_u16()));

    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}
