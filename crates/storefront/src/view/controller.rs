//! Mounted views and the one-shot fetch that resolves them.
//!
//! A [`MountedView`] owns one [`ViewState`] behind a `watch` channel. The
//! fetch task is the only writer of the phase; handlers read snapshots and
//! change the selected category. Every mount carries a [`Liveness`] flag that
//! the fetch continuation checks before writing, so a response that lands
//! after unmount is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use wish_purr_core::CategoryFilter;

use super::state::ViewState;
use crate::catalog::ProductSource;

/// Whether the owning view is still mounted.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Handle to one mounted listing view. Clones share the same state.
#[derive(Debug, Clone)]
pub struct MountedView {
    state: Arc<watch::Sender<ViewState>>,
    liveness: Liveness,
}

impl MountedView {
    /// Mount a new view in the loading phase.
    ///
    /// Nothing is fetched until [`load`] runs against it.
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(ViewState::new());
        Self {
            state: Arc::new(state),
            liveness: Liveness::new(),
        }
    }

    /// Mount a view and spawn its fetch onto the runtime.
    #[must_use]
    pub fn spawn<S: ProductSource>(source: S) -> Self {
        let view = Self::new();
        tokio::spawn(load(source, view.clone()));
        view
    }

    /// Current state, whatever the phase.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Wait until the fetch has resolved, then return the state.
    ///
    /// Returns the loading state if the view is unmounted first.
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.state.subscribe();
        loop {
            if !rx.borrow_and_update().phase.is_loading() || !self.is_mounted() {
                return rx.borrow().clone();
            }
            if rx.changed().await.is_err() {
                return rx.borrow().clone();
            }
        }
    }

    /// Change the selected category. Never triggers a fetch.
    pub fn select_category(&self, filter: CategoryFilter) {
        self.state
            .send_if_modified(|state| state.select_category(filter));
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.liveness.is_mounted()
    }

    /// Unmount the view. Later fetch results are ignored; idempotent.
    pub fn unmount(&self) {
        self.liveness.unmount();
        // Wake anyone waiting in `settled`
        self.state.send_modify(|_| {});
    }

    /// The liveness flag handed to the fetch task.
    #[must_use]
    pub fn liveness(&self) -> &Liveness {
        &self.liveness
    }
}

impl Default for MountedView {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the catalog once and resolve `view` with the outcome.
///
/// The view is already loading when mounted; this issues exactly one request
/// and writes at most once. If the view was unmounted while the request was
/// in flight, the result is discarded.
pub async fn load<S: ProductSource>(source: S, view: MountedView) {
    let outcome = source.fetch_products().await;

    if !view.liveness().is_mounted() {
        tracing::debug!("View unmounted before catalog responded, dropping result");
        return;
    }

    match &outcome {
        Ok(products) => tracing::info!(count = products.len(), "Product listing ready"),
        Err(e) => tracing::warn!(error = %e, "Product listing failed to load"),
    }

    // Unmount may race the check above; re-check under the channel lock
    let liveness = view.liveness();
    view.state
        .send_if_modified(|state| liveness.is_mounted() && state.resolve(outcome));
}
