//! Product listing route handlers.
//!
//! Visiting `/products` mounts a listing view and returns the page in its
//! loading state. The page then asks for `/products/views/{id}`, which waits
//! for the catalog fetch to settle and returns either the error block or the
//! category bar and product grid. Category buttons re-request the same view
//! with `?category=...`; that re-projects the held products without
//! contacting the catalog again.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;
use wish_purr_core::CategoryFilter;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;
use crate::view::{MountedView, Phase, ProductCard, ProductLinks, ViewId, ViewState, project};

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub href: String,
    pub name: String,
    pub image_url: String,
    pub label: &'static str,
    pub price: String,
}

impl ProductCardView {
    fn new(card: &ProductCard<'_>, links: &impl ProductLinks) -> Self {
        Self {
            href: links.product_href(card.product.id),
            name: card.product.name.clone(),
            image_url: card.product.image_url.clone(),
            label: card.label(),
            price: card.product.price.display(),
        }
    }
}

/// Category button display data for templates.
#[derive(Clone)]
pub struct CategoryButtonView {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// View query parameters.
#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub category: Option<CategoryFilter>,
}

/// Product listing page, rendered while the view is loading.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub view_id: String,
}

/// Error block shown when the listing failed to load.
#[derive(Template)]
#[template(path = "partials/listing_error.html")]
pub struct ViewErrorTemplate {
    pub message: String,
}

/// Category bar and product grid for a ready listing.
#[derive(Template)]
#[template(path = "partials/listing_ready.html")]
pub struct ViewReadyTemplate {
    pub buttons: Vec<CategoryButtonView>,
    pub cards: Vec<ProductCardView>,
}

/// Mount a listing view and display the page in its loading state.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let (view_id, _) = state.views().mount(state.catalog().clone()).await;
    tracing::info!(%view_id, "Mounted product listing");

    ProductsIndexTemplate {
        view_id: view_id.to_string(),
    }
}

/// Display the settled listing view (HTMX fragment).
#[instrument(skip(state))]
pub async fn show_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Response> {
    let view_id = parse_view_id(&id)?;
    let view = state
        .views()
        .get(view_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("listing view {view_id}")))?;

    let snapshot = settled_with_selection(&view, query.category).await;
    tracing::debug!(%view_id, phase = snapshot.phase.name(), "Rendering listing view");
    render_view(view_id, &snapshot, state.links())
}

/// Apply this request's category, wait for the fetch, and return the state
/// to render.
///
/// The returned state carries the category this request asked for even if a
/// later request changed the view's selection while this one was waiting.
async fn settled_with_selection(view: &MountedView, category: Option<CategoryFilter>) -> ViewState {
    if let Some(category) = category {
        view.select_category(category);
        add_breadcrumb(
            "listing",
            "Selected category",
            Some(&[("category", category.as_str())]),
        );
    }

    let mut snapshot = view.settled().await;
    if let Some(category) = category {
        snapshot.selected_category = category;
    }
    snapshot
}

/// Unmount a listing view.
#[instrument(skip(state))]
pub async fn unmount_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let view_id = parse_view_id(&id)?;
    if state.views().unmount(view_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("listing view {view_id}")))
    }
}

fn parse_view_id(id: &str) -> Result<ViewId> {
    id.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid view id '{id}'")))
}

/// Render a settled view into its HTML fragment.
fn render_view(view_id: ViewId, state: &ViewState, links: &impl ProductLinks) -> Result<Response> {
    let html = match &state.phase {
        // Only reachable when the view was unmounted while waiting
        Phase::Loading => {
            return Err(AppError::NotFound(format!("listing view {view_id}")));
        }
        Phase::Error { message } => ViewErrorTemplate {
            message: message.clone(),
        }
        .render()?,
        Phase::Ready { products } => ViewReadyTemplate {
            buttons: category_buttons(view_id, state.selected_category),
            cards: project(products, state.selected_category)
                .iter()
                .map(|card| ProductCardView::new(card, links))
                .collect(),
        }
        .render()?,
    };

    Ok(Html(html).into_response())
}

/// The category bar, in fixed order, with the selected filter marked.
fn category_buttons(view_id: ViewId, selected: CategoryFilter) -> Vec<CategoryButtonView> {
    CategoryFilter::ALL
        .iter()
        .map(|&filter| CategoryButtonView {
            label: filter.label(),
            href: format!("/products/views/{view_id}?category={}", filter.as_str()),
            active: filter == selected,
        })
        .collect()
}
