//! ThousandEyes API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on test types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use url::Url;

use crate::error::{Result, ThousandEyesError};

const DEFAULT_API_URL: &str = "https://api.thousandeyes.com/v6";
const USER_AGENT: &str = concat!("thousandeyes-rs/", env!("CARGO_PKG_VERSION"));

/// Low-level ThousandEyes API client.
///
/// Handles authentication and HTTP requests. Test-specific operations
/// are implemented via the `Get`, `Create`, `Update`, and `Delete`
/// traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use thousandeyes::ThousandEyesClient;
///
/// # fn example() -> thousandeyes::Result<()> {
/// // Create from environment variables
/// let client = ThousandEyesClient::from_env()?;
///
/// // Or configure manually
/// let client = ThousandEyesClient::new("your-api-token", "https://api.thousandeyes.com/v6")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ThousandEyesClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for ThousandEyesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThousandEyesClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ThousandEyesClient {
    /// Create a client from environment variables.
    ///
    /// Uses `THOUSANDEYES_API_TOKEN` for authentication and optionally
    /// `THOUSANDEYES_API_URL` for the base URL (defaults to
    /// `https://api.thousandeyes.com/v6`).
    ///
    /// # Errors
    ///
    /// Returns an error if `THOUSANDEYES_API_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("THOUSANDEYES_API_TOKEN").map_err(|_| {
            ThousandEyesError::ConfigMissing(
                "THOUSANDEYES_API_TOKEN environment variable not set".to_string(),
            )
        })?;

        let base_url =
            env::var("THOUSANDEYES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided token and base URL.
    ///
    /// # Arguments
    ///
    /// * `token` - ThousandEyes API token
    /// * `base_url` - Base URL for the API (e.g., `https://api.thousandeyes.com/v6`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(ThousandEyesError::Transport)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    ///
    /// Returns the raw response; status validation is performed per
    /// operation via [`expect_status`](Self::expect_status), since each
    /// endpoint documents a single success code.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        self.http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ThousandEyesError::Transport)
    }

    /// Make a POST request with a JSON body.
    ///
    /// The body is serialized up front so that encoding failures surface
    /// as [`ThousandEyesError::Json`] rather than a transport error.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let body = serde_json::to_vec(body)?;

        self.http
            .post(url)
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ThousandEyesError::Transport)
    }

    /// Make a POST request with no body.
    #[tracing::instrument(skip(self))]
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        self.http
            .post(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ThousandEyesError::Transport)
    }

    /// Validate that a response carries the documented success status.
    ///
    /// Returns the response unchanged on a match. A 429 is reported as
    /// [`ThousandEyesError::RateLimited`]; any other mismatch becomes
    /// [`ThousandEyesError::UnexpectedStatus`] carrying the numeric code
    /// and a best-effort error message from the body.
    pub async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
        let status = response.status();

        if status == expected {
            return Ok(response);
        }

        // Handle rate limiting
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(ThousandEyesError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let message = Self::extract_error_message(response, status).await;
        Err(ThousandEyesError::UnexpectedStatus {
            expected: expected.as_u16(),
            status: status.as_u16(),
            message,
        })
    }

    /// Extract an error message from a failed response.
    async fn extract_error_message(response: Response, status: StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // Try to parse as JSON and extract a message field
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("errorMessage").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        if body.is_empty() {
            return format!("HTTP {status}");
        }

        body
    }
}
