//! Catalog product record.

use super::{Category, Price, ProductId};

/// A product as listed by the catalog service.
///
/// Read-only to the storefront: records are rendered in the order received
/// and never deduplicated or re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: String,
    /// Free-form category tag; `None` means uncategorized.
    pub category_name: Option<String>,
}

impl Product {
    /// The display bucket for this product.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::classify(self.category_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(category_name: Option<&str>) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Salmon Pate".to_string(),
            price: Price::thb(Decimal::new(100, 0)),
            image_url: "x.png".to_string(),
            category_name: category_name.map(String::from),
        }
    }

    #[test]
    fn test_category_uses_category_name() {
        assert_eq!(product(Some("ลูกแมว")).category(), Category::Kitten);
        assert_eq!(product(Some("แมวโต")).category(), Category::Adult);
    }

    #[test]
    fn test_uncategorized_product_is_special() {
        assert_eq!(product(None).category(), Category::Special);
    }
}
