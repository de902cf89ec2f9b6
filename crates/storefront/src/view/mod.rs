//! Product listing view.
//!
//! # Lifecycle
//!
//! ```text
//! mount ──> Loading ──┬──> Ready { products } ──> (category changes re-project)
//!                     └──> Error { message }
//! ```
//!
//! Each visit to the listing mounts one view. The view starts loading, its
//! single catalog fetch runs on a spawned task, and the phase changes at most
//! once. Filtering by category only re-projects products already held.

mod controller;
mod filter;
mod links;
mod registry;
mod state;

pub use controller::{Liveness, MountedView, load};
pub use filter::{ProductCard, project};
pub use links::{DetailPageLinks, ProductLinks};
pub use registry::{ViewId, ViewRegistry};
pub use state::{Phase, ViewState};
