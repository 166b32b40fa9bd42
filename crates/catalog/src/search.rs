//! Linear-scan queries over the catalog.
//!
//! No secondary indexes are kept; every query walks the relevant table once
//! and returns matches in insertion order.

use std::collections::HashSet;

use rust_decimal::Decimal;

use stockroom_core::{CategoryId, Entity};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::product::Product;

/// Case-insensitive substring matcher.
struct Needle(String);

impl Needle {
    fn new(query: &str) -> Self {
        Self(query.to_lowercase())
    }

    fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

impl Catalog {
    pub fn search_category_by_name(&self, query: &str) -> Vec<&Category> {
        let needle = Needle::new(query);
        self.categories()
            .filter(|c| needle.matches(c.name()))
            .collect()
    }

    pub fn search_product_by_name(&self, query: &str) -> Vec<&Product> {
        let needle = Needle::new(query);
        self.products()
            .filter(|p| needle.matches(p.name()))
            .collect()
    }

    /// Products priced within `min..=max`. Empty when `min > max`.
    pub fn search_product_by_price_range(&self, min: Decimal, max: Decimal) -> Vec<&Product> {
        self.products()
            .filter(|p| min <= p.price() && p.price() <= max)
            .collect()
    }

    pub fn search_product_by_category_id(&self, id: CategoryId) -> Vec<&Product> {
        self.products()
            .filter(|p| p.category_id() == id)
            .collect()
    }

    /// Products whose category name contains `query`, case-insensitively.
    pub fn search_product_by_category_name(&self, query: &str) -> Vec<&Product> {
        let needle = Needle::new(query);
        let ids: HashSet<CategoryId> = self
            .categories()
            .filter(|c| needle.matches(c.name()))
            .map(|c| c.id())
            .collect();
        if ids.is_empty() {
            return Vec::new();
        }
        self.products()
            .filter(|p| ids.contains(&p.category_id()))
            .collect()
    }
}
