use serde::Deserialize;

use crate::api::ApiError;
use crate::config;
use crate::models::CheckoutItem;

/// Response from `POST /api/create-checkout-session`.
#[derive(Debug, Deserialize)]
struct CheckoutSessionResponse {
    url: String,
}

/// Payment outcome of a completed checkout session.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SessionStatus {
    /// Raw status string from the payment provider, e.g. `"paid"`.
    pub payment_status: String,
    /// Total charged, in euro cents.
    pub amount_total: u64,
}

/// Client for the payment endpoints.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    http: reqwest::Client,
    base_url: String,
}

impl CheckoutClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client pointed at the compile-time backend origin.
    pub fn from_env() -> Self {
        Self::new(config::backend_url())
    }

    /// Create a hosted checkout session for `items` and return the URL the
    /// browser should be sent to. The backend prices the items itself; the
    /// request carries only variants and quantities.
    pub async fn create_session(&self, items: &[CheckoutItem]) -> Result<String, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/create-checkout-session", self.base_url))
            .json(items)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let body: CheckoutSessionResponse = response.json().await?;
        Ok(body.url)
    }

    /// Look up the payment status of a finished session.
    pub async fn session_status(&self, session_id: &str) -> Result<SessionStatus, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/stripe/session/{session_id}", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}
