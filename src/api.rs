//! HTTP client for the catalog/order backend.
//!
//! Fetches catalog items (resolving image paths against the CDN origin)
//! and submits orders. Network or server failures surface as
//! [`ApiError`]; the orchestration boundary logs them and does not retry.

use reqwest::Client;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::models::{ApiListResponse, OrderDraft, OrderResult, ProductItem};

/// Error type for store API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or undecodable body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Server returned a non-2xx status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Client for the Larek storefront API.
pub struct StoreApi {
    api_url: String,
    cdn_url: String,
    client: Client,
}

impl StoreApi {
    /// Create a client from configuration.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            cdn_url: config.cdn_url.clone(),
            client: Client::new(),
        }
    }

    /// Resolve a relative image path against the CDN origin. Absolute
    /// URLs pass through untouched.
    fn resolve_image(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.cdn_url, path)
        }
    }

    fn with_resolved_image(&self, mut item: ProductItem) -> ProductItem {
        item.image = self.resolve_image(&item.image);
        item
    }

    async fn reject_non_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Server { status, message })
    }

    /// Fetch all catalog items, with image URLs resolved.
    pub async fn get_product_list(&self) -> Result<Vec<ProductItem>, ApiError> {
        let url = format!("{}/product/", self.api_url);
        let response = self.client.get(&url).send().await?;
        let response = Self::reject_non_success(response).await?;
        let list: ApiListResponse<ProductItem> = response.json().await?;
        Ok(list
            .items
            .into_iter()
            .map(|item| self.with_resolved_image(item))
            .collect())
    }

    /// Fetch a single catalog item by id, with its image URL resolved.
    pub async fn get_product_item(&self, id: &str) -> Result<ProductItem, ApiError> {
        let url = format!("{}/product/{}", self.api_url, id);
        let response = self.client.get(&url).send().await?;
        let response = Self::reject_non_success(response).await?;
        let item: ProductItem = response.json().await?;
        Ok(self.with_resolved_image(item))
    }

    /// Submit the order draft. Returns the backend's confirmation id and
    /// total.
    pub async fn order_products(&self, order: &OrderDraft) -> Result<OrderResult, ApiError> {
        let url = format!("{}/order", self.api_url);
        let response = self.client.post(&url).json(order).send().await?;
        let response = Self::reject_non_success(response).await?;
        Ok(response.json().await?)
    }
}
