//! Product catalog service client.
//!
//! # Architecture
//!
//! - One read endpoint, `GET {base}/products`, returning a JSON array of
//!   product records or an error payload
//! - The catalog is the source of truth: no local sync and no response
//!   caching, every mounted listing view issues exactly one request
//! - No retries and no deadline: a request runs until it completes or the
//!   transport fails
//!
//! # Example
//!
//! ```rust,ignore
//! use wish_purr_storefront::catalog::{CatalogClient, ProductSource};
//!
//! let client = CatalogClient::new(&config.catalog);
//! let products = client.fetch_products().await?;
//! ```

mod client;
mod conversions;
pub mod types;

pub use client::CatalogClient;

use std::future::Future;

use thiserror::Error;
use wish_purr_core::Product;

/// Message shown when the catalog gives no usable explanation.
pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to load products";

/// Errors that can occur when reading from the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not complete (connection refused, reset, DNS...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service error (HTTP {status}): {}", .message.as_deref().unwrap_or("no error message"))]
    Service {
        status: u16,
        /// Text of the body's `error` field, when present.
        message: Option<String>,
    },

    /// Success status, but the body is not a list of product records.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl CatalogError {
    /// The single human-readable message shown to the shopper.
    ///
    /// Only the service's own error text is passed through; every other
    /// failure reads as the generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Service {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Transport(_) | Self::Service { message: None, .. } | Self::Malformed(_) => {
                DEFAULT_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Anything that can produce the product listing.
///
/// Implemented by [`CatalogClient`]; the listing view only depends on this
/// seam so its state machine can be driven without a network.
pub trait ProductSource: Send + Sync + 'static {
    /// Read the full product list, in service order.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_uses_service_message() {
        let err = CatalogError::Service {
            status: 404,
            message: Some("not found".to_string()),
        };
        assert_eq!(err.user_message(), "not found");
        assert_eq!(err.to_string(), "Service error (HTTP 404): not found");
    }

    #[test]
    fn test_service_error_without_message_uses_default() {
        let err = CatalogError::Service {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Failed to load products");
        assert_eq!(err.to_string(), "Service error (HTTP 500): no error message");
    }

    #[test]
    fn test_malformed_uses_default_message() {
        let err = CatalogError::Malformed("expected a sequence".to_string());
        assert_eq!(err.user_message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_json_error_converts_to_malformed() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = CatalogError::from(json_err);
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}
