//! Listing view state and its transitions.

use wish_purr_core::{CategoryFilter, Product};

use super::filter::{ProductCard, project};
use crate::catalog::CatalogError;

/// Where the listing is in its one-shot load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Ready {
        /// Service order, never re-sorted.
        products: Vec<Product>,
    },
}

impl Phase {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error { .. } => "error",
            Self::Ready { .. } => "ready",
        }
    }
}

/// State of one mounted listing view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub phase: Phase,
    pub selected_category: CategoryFilter,
}

impl ViewState {
    /// A freshly mounted view: loading, showing all categories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the catalog outcome.
    ///
    /// Only the first call after mount has any effect; returns whether the
    /// phase changed.
    pub fn resolve(&mut self, outcome: Result<Vec<Product>, CatalogError>) -> bool {
        if !self.phase.is_loading() {
            return false;
        }

        self.phase = match outcome {
            Ok(products) => Phase::Ready { products },
            Err(err) => Phase::Error {
                message: err.user_message(),
            },
        };
        true
    }

    /// Change the selected category. Never touches `phase`.
    ///
    /// Returns whether the selection changed.
    pub fn select_category(&mut self, filter: CategoryFilter) -> bool {
        if self.selected_category == filter {
            return false;
        }
        self.selected_category = filter;
        true
    }

    /// The cards to render, or `None` unless the view is ready.
    #[must_use]
    pub fn visible(&self) -> Option<Vec<ProductCard<'_>>> {
        match &self.phase {
            Phase::Ready { products } => Some(project(products, self.selected_category)),
            Phase::Loading | Phase::Error { .. } => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use wish_purr_core::{Price, ProductId};

    use super::*;

    fn product(id: u64, category_name: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::thb(Decimal::new(100, 0)),
            image_url: format!("{id}.png"),
            category_name: category_name.map(String::from),
        }
    }

    #[test]
    fn test_new_view_is_loading_with_all_selected() {
        let view = ViewState::new();
        assert!(view.phase.is_loading());
        assert_eq!(view.selected_category, CategoryFilter::All);
        assert!(view.visible().is_none());
    }

    #[test]
    fn test_resolve_success_keeps_products_verbatim() {
        let products = vec![product(2, Some("แมวโต")), product(1, None), product(2, None)];
        let mut view = ViewState::new();

        assert!(view.resolve(Ok(products.clone())));
        assert_eq!(view.phase, Phase::Ready { products });
    }

    #[test]
    fn test_resolve_empty_list_is_ready() {
        let mut view = ViewState::new();
        view.resolve(Ok(Vec::new()));
        assert_eq!(view.phase.name(), "ready");
        assert!(view.visible().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_error_uses_user_message() {
        let mut view = ViewState::new();
        view.resolve(Err(CatalogError::Service {
            status: 404,
            message: Some("not found".to_string()),
        }));
        assert_eq!(
            view.phase,
            Phase::Error {
                message: "not found".to_string()
            }
        );
        assert!(view.visible().is_none());
    }

    #[test]
    fn test_resolve_happens_at_most_once() {
        let mut view = ViewState::new();
        assert!(view.resolve(Ok(vec![product(1, None)])));
        assert!(!view.resolve(Err(CatalogError::Malformed("late".to_string()))));
        assert_eq!(view.phase.name(), "ready");
    }

    #[test]
    fn test_select_category_leaves_phase_and_products_alone() {
        let products = vec![product(1, Some("ลูกแมว")), product(2, Some("แมวโต"))];
        let mut view = ViewState::new();
        view.resolve(Ok(products.clone()));

        for filter in CategoryFilter::ALL {
            view.select_category(filter);
            assert_eq!(view.phase, Phase::Ready { products: products.clone() });
        }
    }

    #[test]
    fn test_select_same_category_twice_is_idempotent() {
        let mut view = ViewState::new();
        view.resolve(Ok(vec![product(1, Some("ลูกแมว")), product(2, None)]));

        assert!(view.select_category(CategoryFilter::Kitten));
        let first: Vec<_> = view.visible().unwrap().iter().map(|c| c.product.id).collect();
        assert!(!view.select_category(CategoryFilter::Kitten));
        let second: Vec<_> = view.visible().unwrap().iter().map(|c| c.product.id).collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![ProductId::new(1)]);
    }
}
