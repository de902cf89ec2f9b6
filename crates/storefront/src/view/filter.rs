//! Projection from ready products to the cards on screen.

use wish_purr_core::{Category, CategoryFilter, Product};

/// A product paired with the label it is shown under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCard<'a> {
    pub product: &'a Product,
    pub category: Category,
}

impl ProductCard<'_> {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Cards for `products` that pass `filter`, in the order given.
///
/// Pure: the same inputs always give the same cards.
#[must_use]
pub fn project(products: &[Product], filter: CategoryFilter) -> Vec<ProductCard<'_>> {
    products
        .iter()
        .map(|product| ProductCard {
            product,
            category: product.category(),
        })
        .filter(|card| filter.matches(card.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use wish_purr_core::{Price, ProductId};

    use super::*;

    fn catalog() -> Vec<Product> {
        [
            (1, Some("ลูกแมว")),
            (2, Some("แมวโต")),
            (3, None),
            (4, Some("ลูกแมว")),
            (5, Some("อาหารเปียก")),
        ]
        .into_iter()
        .map(|(id, category_name)| Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::thb(Decimal::new(100, 0)),
            image_url: format!("{id}.png"),
            category_name: category_name.map(String::from),
        })
        .collect()
    }

    fn ids(cards: &[ProductCard<'_>]) -> Vec<u64> {
        cards.iter().map(|c| c.product.id.as_u64()).collect()
    }

    #[test]
    fn test_all_keeps_every_product_in_order() {
        let products = catalog();
        assert_eq!(ids(&project(&products, CategoryFilter::All)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_kitten_filter() {
        let products = catalog();
        assert_eq!(ids(&project(&products, CategoryFilter::Kitten)), vec![1, 4]);
    }

    #[test]
    fn test_adult_filter() {
        let products = catalog();
        assert_eq!(ids(&project(&products, CategoryFilter::Adult)), vec![2]);
    }

    #[test]
    fn test_special_collects_unknown_and_missing_categories() {
        let products = catalog();
        assert_eq!(ids(&project(&products, CategoryFilter::Special)), vec![3, 5]);
    }

    #[test]
    fn test_every_card_has_a_label() {
        let products = catalog();
        let labels: Vec<&str> = project(&products, CategoryFilter::All)
            .iter()
            .map(ProductCard::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "สำหรับลูกแมว",
                "สำหรับแมวโต",
                "สูตรพิเศษ",
                "สำหรับลูกแมว",
                "สูตรพิเศษ"
            ]
        );
    }

    #[test]
    fn test_labels_do_not_depend_on_filter() {
        let products = catalog();
        let card = project(&products, CategoryFilter::Kitten)[0];
        assert_eq!(card.label(), "สำหรับลูกแมว");
    }

    #[test]
    fn test_empty_products() {
        assert!(project(&[], CategoryFilter::Kitten).is_empty());
    }
}
