//! Session-backed shopping cart.
//!
//! The cart never touches the data service: it lives in the session and
//! is serialized back on every mutation. Each line snapshots the full
//! product row, so the price charged at checkout is the price seen when
//! the line was added.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cabella_backend::models::Product;
use cabella_core::ProductId;

/// One cart line: a product snapshot and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// The shopping cart. All operations are total; none can fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product: bump the quantity if it is already in the cart,
    /// otherwise append a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove a line unconditionally. A miss is a no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Overwrite a line's quantity. A quantity below 1 removes the line,
    /// exactly like [`remove`](Self::remove). A miss is a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity < 1 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart. Invoked only after a successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of articles (sum of quantities).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart total: sum of snapshot price times quantity per line.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.product.price * Decimal::from(l.quantity))
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn product(name: &str, price: Decimal) -> Product {
        Product {
            id: ProductId::new(uuid::Uuid::new_v4()),
            name: name.to_string(),
            category: "Table".to_string(),
            price,
            description: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_new_product_inserts_line_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(&product("Table basse", Decimal::new(12900, 2)));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let table = product("Table basse", Decimal::new(12900, 2));
        let mut cart = Cart::new();
        cart.add(&table);
        cart.add(&table);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_remove_deletes_line_regardless_of_quantity() {
        let table = product("Table basse", Decimal::new(12900, 2));
        let mut cart = Cart::new();
        cart.add(&table);
        cart.add(&table);
        cart.remove(table.id);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product("Chaise", Decimal::new(4500, 2)));
        cart.remove(ProductId::new(uuid::Uuid::new_v4()));

        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let table = product("Table basse", Decimal::new(12900, 2));
        let mut cart = Cart::new();
        cart.add(&table);
        cart.set_quantity(table.id, 5);

        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_set_quantity_below_one_removes_line() {
        let table = product("Table basse", Decimal::new(12900, 2));
        let mut cart = Cart::new();
        cart.add(&table);
        cart.set_quantity(table.id, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let table = product("Table basse", Decimal::new(12900, 2));
        let chair = product("Chaise", Decimal::new(4500, 2));
        let mut cart = Cart::new();
        cart.add(&table);
        cart.add(&chair);
        cart.set_quantity(chair.id, 4);

        // 129.00 + 4 * 45.00
        assert_eq!(cart.total(), Decimal::new(30900, 2));
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(&product("Lit", Decimal::new(79900, 2)));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }
}
