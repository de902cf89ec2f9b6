//! Wire record to domain type conversions.

use rust_decimal::Decimal;
use wish_purr_core::{Price, Product, ProductId};

use super::CatalogError;
use super::types::ProductRecord;

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let amount = Decimal::try_from(record.price).map_err(|e| {
            CatalogError::Malformed(format!(
                "product {} has unrepresentable price {}: {e}",
                record.product_id, record.price
            ))
        })?;

        Ok(Self {
            id: ProductId::new(record.product_id),
            name: record.name,
            price: Price::thb(amount),
            image_url: record.image_cover,
            category_name: record.category_name,
        })
    }
}

/// Convert a whole listing, keeping service order. One bad record fails all.
pub fn convert_products(records: Vec<ProductRecord>) -> Result<Vec<Product>, CatalogError> {
    records.into_iter().map(Product::try_from).collect()
}
