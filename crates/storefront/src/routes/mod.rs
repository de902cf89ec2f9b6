//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Health check
//! GET    /                        - Redirect to product listing
//!
//! # Products
//! GET    /products                - Mount a listing view (renders loading state)
//! GET    /products/views/{id}     - Settled view fragment (HTMX), ?category=all|kitten|adult|special
//! DELETE /products/views/{id}     - Unmount a listing view
//! ```

pub mod products;

use axum::{Router, response::Redirect, routing::get};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route(
            "/views/{id}",
            get(products::show_view).delete(products::unmount_view),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page is the listing
        .route("/", get(|| async { Redirect::to("/products") }))
        .route("/health", get(health))
        // Product routes
        .nest("/products", product_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the catalog service.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::config::StorefrontConfig;

    fn app() -> Router {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        routes().with_state(AppState::new(&config))
    }

    async fn send(method: &str, uri: &str) -> axum::response::Response {
        app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(send("GET", "/health").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_redirects_to_listing() {
        let response = send("GET", "/").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/products");
    }

    #[tokio::test]
    async fn test_unknown_view_is_not_found() {
        let uri = format!("/products/views/{}", crate::view::ViewId::new_v4());
        assert_eq!(send("GET", &uri).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(send("DELETE", &uri).await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_view_id_is_bad_request() {
        let response = send("GET", "/products/views/not-a-uuid").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let uri = format!(
            "/products/views/{}?category=puppy",
            crate::view::ViewId::new_v4()
        );
        assert_eq!(send("GET", &uri).await.status(), StatusCode::BAD_REQUEST);
    }
}
