//! Registry of mounted listing views.
//!
//! Views are keyed by a random id handed to the browser. Idle views are
//! evicted after the configured timeout; eviction and explicit removal both
//! unmount the view so a late catalog response is ignored.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use moka::notification::RemovalCause;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::controller::MountedView;
use crate::catalog::ProductSource;

/// Upper bound on concurrently mounted views.
const MAX_MOUNTED_VIEWS: u64 = 10_000;

/// Identifier of one mounted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(Uuid);

impl ViewId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ViewId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Mounted views by id.
#[derive(Clone)]
pub struct ViewRegistry {
    views: Cache<ViewId, MountedView>,
}

impl ViewRegistry {
    /// Create a registry that unmounts views idle for `idle_timeout`.
    #[must_use]
    pub fn new(idle_timeout: Duration) -> Self {
        let views = Cache::builder()
            .max_capacity(MAX_MOUNTED_VIEWS)
            .time_to_idle(idle_timeout)
            .eviction_listener(|id: Arc<ViewId>, view: MountedView, cause| {
                if cause != RemovalCause::Explicit {
                    tracing::debug!(view_id = %id, ?cause, "Evicting mounted view");
                }
                view.unmount();
            })
            .build();

        Self { views }
    }

    /// Mount a new view and start its one catalog fetch.
    pub async fn mount<S: ProductSource>(&self, source: S) -> (ViewId, MountedView) {
        let id = ViewId::new_v4();
        let view = MountedView::spawn(source);
        self.views.insert(id, view.clone()).await;
        tracing::debug!(view_id = %id, "Mounted view");
        (id, view)
    }

    /// Look up a mounted view.
    pub async fn get(&self, id: ViewId) -> Option<MountedView> {
        self.views.get(&id).await
    }

    /// Unmount and forget a view. Returns whether it was mounted.
    pub async fn unmount(&self, id: ViewId) -> bool {
        match self.views.remove(&id).await {
            Some(view) => {
                view.unmount();
                tracing::debug!(view_id = %id, "Unmounted view");
                true
            }
            None => false,
        }
    }
}
