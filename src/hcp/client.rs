//! TFE HTTP client for API interactions

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::config::api;
use crate::error::{Result, TfeError};

/// JSON-API error document returned with non-success statuses
#[derive(Deserialize, Debug)]
struct ErrorDocument {
    #[serde(default)]
    errors: Vec<ErrorObject>,
}

/// Single entry of a JSON-API `errors` array
#[derive(Deserialize, Debug)]
struct ErrorObject {
    title: Option<String>,
    detail: Option<String>,
}

/// TFE API client
///
/// Owns the connection pool and the API token. Resource services borrow it;
/// cloning is not needed because every call takes `&self`.
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
}

impl TfeClient {
    /// Create a new TFE client with the default request timeout
    pub fn new(token: String, host: String) -> Self {
        Self::with_timeout(token, host, Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
    }

    /// Create a new TFE client with a custom per-request timeout
    pub fn with_timeout(token: String, host: String, timeout: Duration) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
        }
    }

    /// Build the base URL for API requests
    ///
    /// A bare hostname is served over HTTPS; an explicit `http://` or
    /// `https://` address is used as given.
    pub(crate) fn base_url(&self) -> String {
        let address = if self.host.contains("://") {
            self.host.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.host)
        };
        format!("{}{}", address, api::BASE_PATH)
    }

    /// Get the configured host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Build a request for an API path relative to the base URL
    ///
    /// Injects the bearer token and JSON-API media type headers. The path is
    /// used verbatim, so callers must percent-encode dynamic segments.
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Request> {
        let url = format!("{}/{}", self.base_url(), path.trim_start_matches('/'));

        let mut builder = self
            .client
            .request(method, &url)
            .bearer_auth(&self.token)
            .header(ACCEPT, api::MEDIA_TYPE)
            .header(CONTENT_TYPE, api::MEDIA_TYPE);

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        Ok(builder.build()?)
    }

    /// Execute a request and decode the JSON response into `T`
    ///
    /// Returns `TfeError::Cancelled` as soon as `cancel` fires, even while the
    /// request is in flight. A token that is already cancelled short-circuits
    /// before anything is sent.
    pub async fn execute<T>(&self, cancel: &CancellationToken, request: Request) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("{} {}", request.method(), request.url());

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Request cancelled by caller");
                Err(TfeError::Cancelled)
            }
            result = self.send_and_decode(request) => result,
        }
    }

    async fn send_and_decode<T>(&self, request: Request) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("API returned status {}", status);
            return Err(api_error(status, &body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| TfeError::Json(format!("failed to decode response: {}", e)))
    }
}

/// Map a non-success response to `TfeError::Api`
fn api_error(status: StatusCode, body: &str) -> TfeError {
    let message = match status {
        StatusCode::UNAUTHORIZED => "unauthorized".to_string(),
        StatusCode::NOT_FOUND => "resource not found".to_string(),
        _ => error_details(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        }),
    };

    TfeError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Join the title/detail pairs of a JSON-API error document
fn error_details(body: &str) -> Option<String> {
    let doc: ErrorDocument = serde_json::from_str(body).ok()?;

    let lines: Vec<String> = doc
        .errors
        .into_iter()
        .filter_map(|e| match (e.title, e.detail) {
            (Some(title), Some(detail)) if !detail.is_empty() => {
                Some(format!("{}: {}", title, detail))
            }
            (Some(title), _) => Some(title),
            (None, Some(detail)) => Some(detail),
            (None, None) => None,
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }
}
