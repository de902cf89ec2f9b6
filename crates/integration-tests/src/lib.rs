//! Integration tests for the Wish Purr storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p wish-purr-integration-tests
//! ```
//!
//! Everything runs in-process: a stub catalog service and the storefront
//! router are both served on ephemeral localhost ports, and tests drive the
//! storefront over real HTTP with `reqwest`.

#![allow(clippy::expect_used, clippy::missing_panics_doc)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use wish_purr_storefront::config::StorefrontConfig;
use wish_purr_storefront::state::AppState;

/// Serve `app` on an ephemeral localhost port.
async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });
    addr
}

/// A catalog service answering `GET /products` with a fixed response.
pub struct StubCatalog {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    gate: Option<Arc<Notify>>,
}

impl StubCatalog {
    /// Start a catalog that answers immediately.
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        Self::start_inner(status, body, None).await
    }

    /// Start a catalog that holds every response until [`Self::release`].
    pub async fn start_gated(status: StatusCode, body: &'static str) -> Self {
        Self::start_inner(status, body, Some(Arc::new(Notify::new()))).await
    }

    async fn start_inner(
        status: StatusCode,
        body: &'static str,
        gate: Option<Arc<Notify>>,
    ) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler_hits = Arc::clone(&hits);
        let handler_gate = gate.clone();

        let app = Router::new().route(
            "/products",
            get(move || {
                let hits = Arc::clone(&handler_hits);
                let gate = handler_gate.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    if let Some(gate) = gate {
                        gate.notified().await;
                    }
                    (status, body)
                }
            }),
        );

        let addr = serve(app).await;
        Self {
            base_url: format!("http://{addr}"),
            hits,
            gate,
        }
    }

    /// Let one held response through.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Number of `/products` requests received.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Base URL of a port nothing is listening on.
pub async fn unreachable_catalog_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{addr}")
}

/// A running storefront pointed at a catalog base URL.
pub struct Storefront {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl Storefront {
    /// Start the storefront router against `catalog_base_url`.
    pub async fn start(catalog_base_url: &str) -> Self {
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "CATALOG_API_BASE_URL").then(|| catalog_base_url.to_string())
        })
        .expect("Invalid test configuration");

        let addr = serve(wish_purr_storefront::app(AppState::new(&config))).await;
        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    /// Visit the listing page. Returns the mounted view id and the page HTML.
    pub async fn mount(&self) -> (String, String) {
        let response = self
            .client
            .get(format!("{}/products", self.base_url))
            .send()
            .await
            .expect("Listing request failed");
        assert_eq!(response.status(), StatusCode::OK);

        let html = response.text().await.expect("Listing body unreadable");
        let view_id = extract_view_id(&html).expect("Listing page has no view id");
        (view_id, html)
    }

    /// Request the settled view fragment, optionally selecting a category.
    pub async fn view(&self, view_id: &str, category: Option<&str>) -> reqwest::Response {
        let mut url = format!("{}/products/views/{view_id}", self.base_url);
        if let Some(category) = category {
            url.push_str("?category=");
            url.push_str(category);
        }
        self.client
            .get(url)
            .send()
            .await
            .expect("View request failed")
    }

    /// Unmount a view.
    pub async fn unmount(&self, view_id: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}/products/views/{view_id}", self.base_url))
            .send()
            .await
            .expect("Unmount request failed")
    }
}

/// Pull the `data-view-id` attribute out of the listing page.
#[must_use]
pub fn extract_view_id(html: &str) -> Option<String> {
    const MARKER: &str = "data-view-id=\"";
    let start = html.find(MARKER)? + MARKER.len();
    let rest = html.get(start..)?;
    let end = rest.find('"')?;
    rest.get(..end).map(String::from)
}

/// Number of product cards in a ready fragment.
#[must_use]
pub fn product_count(html: &str) -> usize {
    html.matches("href=\"/product/").count()
}
