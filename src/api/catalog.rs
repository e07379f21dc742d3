use serde::Deserialize;

use crate::api::ApiError;
use crate::config;
use crate::models::Product;

/// Envelope for `GET /api/products`.
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    #[serde(default)]
    products: Vec<Product>,
}

/// Read-only client for the product catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
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

    /// Fetch the whole catalog, in backend order.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/products", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let body: ProductsResponse = response.json().await?;
        Ok(body.products)
    }

    /// Fetch one product by slug. The backend reports a missing product as a
    /// non-success status, so every non-success maps to [`ApiError::NotFound`].
    pub async fn product(&self, slug: &str) -> Result<Product, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/products/{slug}", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::NotFound(slug.to_string()));
        }
        Ok(response.json().await?)
    }
}
