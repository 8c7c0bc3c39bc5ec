//! Cart State
//!
//! Client-side cart: line items keyed by product id, with quantities and a
//! subtotal in cents. No checkout, no persistence.

use leptos::prelude::*;

use crate::models::Product;

/// One product line in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub unit_price_cents: u32,
    pub quantity: u32,
}

impl CartLine {
    pub fn total_cents(&self) -> u32 {
        self.unit_price_cents * self.quantity
    }
}

/// Cart contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product, merging into an existing line
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price_cents: product.price_cents,
                quantity: 1,
            });
        }
    }

    /// Increment an existing line; no-op if the product is not in the cart
    pub fn add_one(&mut self, product_id: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity += 1;
        }
    }

    /// Remove one unit; the line disappears at zero
    pub fn remove_one(&mut self, product_id: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            if line.quantity > 1 {
                line.quantity -= 1;
            } else {
                self.lines.retain(|l| l.product_id != product_id);
            }
        }
    }

    pub fn quantity(&self, product_id: u32) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    pub fn subtotal_cents(&self) -> u32 {
        self.lines.iter().map(|l| l.total_cents()).sum()
    }
}

/// Format a cent amount for display
pub fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Get the shared cart signal from context
pub fn use_cart() -> RwSignal<Cart> {
    expect_context::<RwSignal<Cart>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u32, price_cents: u32) -> Product {
        Product {
            id,
            restaurant_id: 1,
            name: format!("Product {}", id),
            price_cents,
            is_liked: false,
        }
    }

    #[test]
    fn add_merges_into_existing_line() {
        let mut cart = Cart::new();
        let burger = make_product(1, 899);

        cart.add(&burger);
        cart.add(&burger);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity(1), 2);
    }

    #[test]
    fn add_one_only_touches_existing_lines() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, 899));

        cart.add_one(1);
        cart.add_one(42);

        assert_eq!(cart.quantity(1), 2);
        assert_eq!(cart.quantity(42), 0);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn remove_one_drops_line_at_zero() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, 899));
        cart.add_one(1);

        cart.remove_one(1);
        assert_eq!(cart.quantity(1), 1);

        cart.remove_one(1);
        assert_eq!(cart.quantity(1), 0);
        assert!(cart.is_empty());

        // Removing from an empty cart is a no-op
        cart.remove_one(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn subtotal_sums_line_totals() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, 899));
        cart.add_one(1);
        cart.add(&make_product(2, 350));

        assert_eq!(cart.subtotal_cents(), 899 * 2 + 350);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(899), "$8.99");
        assert_eq!(format_cents(12000), "$120.00");
    }
}
