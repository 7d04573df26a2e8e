//! HTTP client for the shop API.
//!
//! The backend exposes a small JSON surface: the product listing at
//! `GET /bowls/` and order creation at `POST /orders/`. Response bodies are
//! read as text before parsing so malformed payloads can be captured in
//! diagnostics.

pub mod types;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::instrument;
use url::Url;

pub use types::{OrderConfirmation, OrderItem, OrderPayload, Product};

/// Maximum number of body characters captured into error diagnostics.
const BODY_SNIPPET_LEN: usize = 200;

/// Errors that can occur when calling the shop API.
///
/// All three variants are recoverable: the catalog loader substitutes the
/// bundled fallback and checkout surfaces a notice while keeping the cart.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the shop API.
///
/// Cheaply cloneable; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Create a new client for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base: base.as_str().trim_end_matches('/').to_owned(),
            }),
        })
    }

    /// Fetch the product catalog.
    ///
    /// Succeeds only when the transport succeeds, the status is 2xx, and the
    /// body is a JSON array of products; every other outcome is an error.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that is not a product list.
    #[instrument(skip(self))]
    pub async fn fetch_catalog(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/bowls/", self.inner.base);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(
                status = %status,
                body = %snippet(&body),
                "catalog request rejected"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(
                error = %e,
                body = %snippet(&body),
                "catalog body did not parse as a product list"
            );
            ApiError::Parse(e)
        })
    }

    /// Submit an order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// unparsable confirmation. The caller decides what happens to the cart;
    /// this method only reports the outcome.
    #[instrument(skip(self, payload), fields(items = payload.items.len()))]
    pub async fn submit_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderConfirmation, ApiError> {
        let url = format!("{}/orders/", self.inner.base);
        let response = self.inner.client.post(&url).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(
                status = %status,
                body = %snippet(&body),
                "order request rejected"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(
                error = %e,
                body = %snippet(&body),
                "order confirmation did not parse"
            );
            ApiError::Parse(e)
        })
    }
}

/// Truncate a response body for logs and error messages.
fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_carries_body() {
        let err = ApiError::Status {
            status: 503,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: upstream down");
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(snippet(&body).len(), BODY_SNIPPET_LEN);
        assert_eq!(snippet("short"), "short");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let base = Url::parse("http://127.0.0.1:8000/api/").unwrap();
        let client = ApiClient::new(&base, Duration::from_secs(1)).unwrap();
        assert_eq!(client.inner.base, "http://127.0.0.1:8000/api");
    }
}
