//! Logging and error-tracking setup for the storefront binary.
//!
//! Sentry must be initialized before the subscriber is installed so the
//! Sentry layer has a client to report to. Warnings and errors become Sentry
//! events; info and debug lines ride along as breadcrumbs.

use std::borrow::Cow;

use sentry::integrations::tracing::{self as sentry_tracing, EventFilter};
use tracing::{Level, Metadata};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, StorefrontConfig};

/// Directives used when `RUST_LOG` is unset.
const DEFAULT_LOG_DIRECTIVES: &str = "wish_purr_storefront=info,tower_http=debug";

/// Start the Sentry client if a DSN is configured.
///
/// The returned guard flushes pending events on drop; keep it alive for the
/// life of the process.
#[must_use]
pub fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;
    Some(sentry::init((dsn, sentry_options(config))))
}

fn sentry_options(config: &StorefrontConfig) -> sentry::ClientOptions {
    sentry::ClientOptions {
        release: sentry::release_name!(),
        environment: config.sentry_environment.clone().map(Cow::Owned),
        sample_rate: config.sentry_sample_rate,
        traces_sample_rate: config.sentry_traces_sample_rate,
        attach_stacktrace: true,
        ..Default::default()
    }
}

/// Install the global tracing subscriber.
pub fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVES.into());

    let (text, json) = match format {
        LogFormat::Text => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text)
        .with(json)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

/// Map a tracing level onto what Sentry records for it.
fn sentry_event_filter(metadata: &Metadata<'_>) -> EventFilter {
    level_filter(*metadata.level())
}

fn level_filter(level: Level) -> EventFilter {
    if level <= Level::WARN {
        EventFilter::Event
    } else if level <= Level::DEBUG {
        EventFilter::Breadcrumb
    } else {
        EventFilter::Ignore
    }
}
