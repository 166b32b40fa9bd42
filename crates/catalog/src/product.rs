use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, Entity, ProductId, ValueObject};

use crate::category::Category;

/// One entry of a product's price audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChange {
    /// Position in the history, starting at 0 for the creation price.
    ///
    /// Strictly increasing, so entries stamped within the same clock tick stay ordered.
    pub sequence: u64,
    pub changed_at: DateTime<Utc>,
    pub price: Decimal,
}

impl ValueObject for PriceChange {}

/// A sellable item bound to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    description: String,
    category_id: CategoryId,
    quantity: i64,
    price_history: Vec<PriceChange>,
}

/// Partial update for a [`Product`]. `None` leaves the field unchanged.
///
/// Empty strings for `name`/`description` are treated as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub quantity: Option<i64>,
}

impl ProductPatch {
    pub fn price(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn quantity(quantity: i64) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}

impl Product {
    /// Build a product whose history is seeded with `price` at `created_at`.
    pub(crate) fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
        category_id: CategoryId,
        quantity: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
            category_id,
            quantity,
            price_history: vec![PriceChange {
                sequence: 0,
                changed_at: created_at,
                price,
            }],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Full price history, oldest first. Never empty.
    pub fn price_history(&self) -> &[PriceChange] {
        &self.price_history
    }

    pub fn current_price_change(&self) -> &PriceChange {
        // Seeded at construction and only ever appended to.
        &self.price_history[self.price_history.len() - 1]
    }

    /// Apply a partial update, stamping any price change with `at`.
    ///
    /// A history entry is appended only when the supplied price differs
    /// numerically from the current one. The caller is responsible for
    /// checking that `category_id` refers to an existing category.
    pub fn update(&mut self, patch: ProductPatch, at: DateTime<Utc>) {
        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(price) = patch.price {
            if price != self.price {
                self.price = price;
                let sequence = self.current_price_change().sequence + 1;
                self.price_history.push(PriceChange {
                    sequence,
                    changed_at: at,
                    price,
                });
            }
        }
        if let Some(description) = patch.description.filter(|d| !d.is_empty()) {
            self.description = description;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(quantity) = patch.quantity {
            if quantity != self.quantity {
                self.quantity = quantity;
            }
        }
    }

    /// Add `amount` to the quantity. `amount` may be negative.
    ///
    /// Wraps at the `i64` bounds so that a later `decrease_quantity(amount)`
    /// always restores the previous value.
    pub fn increase_quantity(&mut self, amount: i64) {
        self.quantity = self.quantity.wrapping_add(amount);
    }

    /// Subtract `amount` from the quantity. The result may go below zero.
    ///
    /// Wraps at the `i64` bounds, mirroring `increase_quantity`.
    pub fn decrease_quantity(&mut self, amount: i64) {
        self.quantity = self.quantity.wrapping_sub(amount);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A product together with its resolved category, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductView<'a> {
    pub product: &'a Product,
    pub category: &'a Category,
}

impl core::fmt::Display for ProductView<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let p = self.product;
        write!(
            f,
            "Product Id: {}, Product Price: {}, Product Name: {}, Description: {}, Quantity: {}, Category: {}",
            p.id,
            p.price,
            p.name,
            p.description,
            p.quantity,
            self.category.name()
        )
    }
}
