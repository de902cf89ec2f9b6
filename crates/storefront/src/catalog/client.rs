//! Catalog service HTTP client.
//!
//! Uses `reqwest` for HTTP. Responses are read as text first so failure
//! bodies can be logged and mined for an `error` message.

use std::sync::Arc;

use tracing::instrument;
use url::Url;
use wish_purr_core::Product;

use super::conversions::convert_products;
use super::types::{ProductRecord, error_message_from};
use super::{CatalogError, ProductSource};
use crate::config::CatalogConfig;

/// Longest slice of a response body written to logs.
const LOGGED_BODY_CHARS: usize = 500;

/// Client for the product catalog service.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    products_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                products_url: config.products_url.clone(),
            }),
        }
    }

    /// Fetch the product listing.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Transport` if no response could be obtained
    /// - `CatalogError::Service` if the service returned a non-success status
    /// - `CatalogError::Malformed` if a success body is not a product list
    #[instrument(skip(self), fields(url = %self.inner.products_url))]
    pub async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.products_url.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                body = %response_text.chars().take(LOGGED_BODY_CHARS).collect::<String>(),
                "Catalog service returned non-success status"
            );
            return Err(CatalogError::Service {
                status: status.as_u16(),
                message: error_message_from(&response_text),
            });
        }

        let records: Vec<ProductRecord> = match serde_json::from_str(&response_text) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(LOGGED_BODY_CHARS).collect::<String>(),
                    "Failed to parse catalog product listing"
                );
                return Err(e.into());
            }
        };

        let products = convert_products(records)?;
        tracing::debug!(count = products.len(), "Fetched product listing");
        Ok(products)
    }
}

impl ProductSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_products().await
    }
}
