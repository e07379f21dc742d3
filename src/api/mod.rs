use thiserror::Error;

pub mod catalog;
pub mod checkout;

pub use catalog::CatalogClient;
pub use checkout::{CheckoutClient, SessionStatus};

/// Errors surfaced by the backend clients.
/// `Clone` so views can park one in a signal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Status(u16),
    /// The requested product does not exist.
    #[error("no product with slug `{0}`")]
    NotFound(String),
    /// The response body was not the expected shape.
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
