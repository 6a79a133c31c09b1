//! Cart line and product descriptor types.
//!
//! These types define the persisted cart snapshot format: a JSON array of
//! flat objects with camelCase field names, e.g.
//!
//! ```json
//! [{"id": "p-1", "name": "Almond Bar", "price": "4.50", "quantity": 2}]
//! ```
//!
//! Snapshots written by older clients may carry extra product fields;
//! deserialization ignores anything it does not recognize.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use rust_decimal::Decimal;

/// Product descriptor captured when an item is added to the cart.
///
/// This is a snapshot of the catalog entry at add time, not a live
/// reference: the cart renders from these fields even if the catalog
/// changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend-assigned product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price at add time.
    pub price: Price,
    /// Primary product image, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One product-quantity pair in the cart.
///
/// Invariant: `quantity >= 1` while the line exists; a line whose quantity
/// would drop to zero is removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line holds.
    #[serde(flatten)]
    pub product: Product,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a fresh line for a newly added product.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The line subtotal: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.times(self.quantity)
    }
}
