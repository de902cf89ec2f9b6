//! Navigation targets for product cards.

use wish_purr_core::ProductId;

/// Produces the link a product card navigates to.
pub trait ProductLinks: Send + Sync {
    fn product_href(&self, id: ProductId) -> String;
}

/// Links to the product detail page at `/product/{id}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailPageLinks;

impl ProductLinks for DetailPageLinks {
    fn product_href(&self, id: ProductId) -> String {
        format!("/product/{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_page_link() {
        assert_eq!(DetailPageLinks.product_href(ProductId::new(42)), "/product/42");
    }
}
