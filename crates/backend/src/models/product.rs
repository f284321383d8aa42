//! Rows of the `products` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cabella_core::ProductId;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub description: Option<String>,
    /// Public blob store URL; the binary itself lives in the bucket.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert/update payload for a product, as submitted by the back-office
/// form. Used for both create and full update.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_numeric_price() {
        // The data service sends numeric columns as JSON numbers.
        let row = serde_json::json!({
            "id": "11111111-0000-0000-0000-000000000000",
            "name": "Canapé 3 places",
            "category": "Canapé",
            "price": 299.99,
            "description": null,
            "image_url": null,
            "created_at": "2024-05-01T10:30:00Z"
        });
        let product: Product = serde_json::from_value(row).unwrap();
        assert_eq!(product.price, Decimal::new(29999, 2));
    }
}
