//! Wish Purr Storefront - Product listing site.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - Product catalog service over HTTP/JSON, read once per listing visit
//! - In-memory registry of mounted listing views (no database)

#![cfg_attr(not(test), forbid(unsafe_code))]

use wish_purr_storefront::config::StorefrontConfig;
use wish_purr_storefront::state::AppState;
use wish_purr_storefront::telemetry;

#[tokio::main]
async fn main() {
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    let sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing(config.log_format);
    if sentry_guard.is_some() {
        tracing::info!("Sentry error tracking enabled");
    }

    tracing::info!(
        catalog = %config.catalog.products_url,
        idle_timeout_secs = config.view_idle_timeout.as_secs(),
        "Starting storefront"
    );

    let addr = config.socket_addr();
    let app = wish_purr_storefront::app(AppState::new(&config))
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    drop(sentry_guard);
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.expect("Failed to listen for Ctrl+C"),
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");

    tracing::info!("Shutting down, draining open connections");
}
