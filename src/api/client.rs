//! Bearer-authenticated JSON client over reqwest.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::session::SessionStore;

/// Client-side error taxonomy for remote API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or transport failure; the request never produced a response.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the stored credential (401/403).
    #[error("not authorized (status {status}), please log in again")]
    Unauthorized { status: u16 },

    /// Any other non-2xx response, with the message extracted from the body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Generic HTTP client for the billing API.
///
/// Owns the base URL and a handle to the session store; every request
/// carries `Authorization: Bearer <token>` when a token is stored. All
/// responses are decoded as JSON except the byte-download endpoints
/// (bill PDF, payment QR).
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout_secs: u64, store: Arc<SessionStore>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the bearer credential attached when present.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.store.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.request(Method::GET, path).send().await?;
        decode(resp).await
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.request(Method::POST, path).json(body).send().await?;
        decode(resp).await
    }

    /// POST a JSON body, ignoring the response payload.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let resp = self.request(Method::POST, path).json(body).send().await?;
        check(resp).await.map(|_| ())
    }

    /// PUT a JSON body and decode a JSON response.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.request(Method::PUT, path).json(body).send().await?;
        decode(resp).await
    }

    /// PATCH a JSON body and decode a JSON response.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.request(Method::PATCH, path).json(body).send().await?;
        decode(resp).await
    }

    /// DELETE a resource, ignoring the response payload.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.request(Method::DELETE, path).send().await?;
        check(resp).await.map(|_| ())
    }

    /// Download raw bytes (bill PDF).
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let resp = self.request(Method::GET, path).send().await?;
        let resp = check(resp).await?;
        Ok(resp.bytes().await?.to_vec())
    }

    /// Download raw bytes where a 404 means "not available" (payment QR).
    pub async fn get_bytes_opt(&self, path: &str) -> Result<Option<Vec<u8>>, ApiError> {
        let resp = self.request(Method::GET, path).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = check(resp).await?;
        Ok(Some(resp.bytes().await?.to_vec()))
    }
}

/// Map a non-success response into the error taxonomy.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized {
            status: status.as_u16(),
        });
    }

    let body = resp.text().await.unwrap_or_default();
    let message =
        super::extract_message(&body).unwrap_or_else(|| "request failed".to_string());
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let resp = check(resp).await?;
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

// ── Tests ───────────────────────────────────────────────────────────
