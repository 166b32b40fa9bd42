//! Grocery store sample data.

use std::time::Duration;

use rust_decimal::Decimal;
use stockroom_catalog::{Catalog, NewProduct};
use stockroom_core::{CategoryId, DomainResult, ProductId};

use crate::timing::measure;

#[derive(Debug, Clone, Copy)]
pub struct SeedCategory {
    pub id: u64,
    pub name: &'static str,
    pub status: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SeedProduct {
    pub id: u64,
    pub name: &'static str,
    pub price_cents: i64,
    pub description: &'static str,
    pub category_id: u64,
    pub quantity: i64,
}

impl SeedProduct {
    pub fn to_new_product(self) -> NewProduct {
        NewProduct {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            price: Decimal::new(self.price_cents, 2),
            description: self.description.to_string(),
            category_id: CategoryId::new(self.category_id),
            quantity: self.quantity,
        }
    }
}

pub const CATEGORIES: &[SeedCategory] = &[
    SeedCategory { id: 1, name: "Vegetables", status: true },
    SeedCategory { id: 2, name: "Dairy", status: true },
    SeedCategory { id: 3, name: "Meat", status: true },
    SeedCategory { id: 4, name: "Bakery", status: true },
    SeedCategory { id: 5, name: "Liquor", status: true },
    SeedCategory { id: 6, name: "Drinks", status: true },
    SeedCategory { id: 7, name: "Cleaning", status: true },
    SeedCategory { id: 8, name: "Health", status: true },
    SeedCategory { id: 9, name: "House", status: true },
];

// Categories must be loaded before any product that references them.
#[rustfmt::skip]
pub const PRODUCTS: &[SeedProduct] = &[
    SeedProduct { id: 1, name: "Mustard Greens Spinach", price_cents: 149, description: "Spinach", category_id: 1, quantity: 100 },
    SeedProduct { id: 2, name: "Cauliflower", price_cents: 350, description: "Per piece", category_id: 1, quantity: 50 },
    SeedProduct { id: 3, name: "Potato", price_cents: 550, description: "5 lb bag", category_id: 1, quantity: 80 },
    SeedProduct { id: 4, name: "Coriander", price_cents: 50, description: "Per piece", category_id: 1, quantity: 200 },
    SeedProduct { id: 5, name: "Whole Milk", price_cents: 399, description: "Per piece", category_id: 2, quantity: 20 },
    SeedProduct { id: 6, name: "Eggnog", price_cents: 499, description: "Per piece", category_id: 2, quantity: 10 },
    SeedProduct { id: 7, name: "Greek Yogurt", price_cents: 599, description: "Per piece", category_id: 2, quantity: 30 },
    SeedProduct { id: 8, name: "Chicken Breast", price_cents: 1599, description: "3.99 per lbs", category_id: 3, quantity: 8 },
    SeedProduct { id: 9, name: "Chicken Leg Quarter", price_cents: 699, description: "1.99 per lbs", category_id: 3, quantity: 12 },
    SeedProduct { id: 10, name: "Chicken Thigh", price_cents: 1099, description: "2.99 per lbs", category_id: 3, quantity: 15 },
    SeedProduct { id: 11, name: "White Bread", price_cents: 399, description: "Per piece", category_id: 4, quantity: 15 },
    SeedProduct { id: 12, name: "Bagel", price_cents: 599, description: "Per Packet 4 pcs", category_id: 4, quantity: 7 },
    SeedProduct { id: 13, name: "Corona Beer", price_cents: 1099, description: "4 cans", category_id: 5, quantity: 10 },
    SeedProduct { id: 14, name: "Hennessy", price_cents: 8099, description: "750 ml", category_id: 5, quantity: 10 },
    SeedProduct { id: 15, name: "Coke", price_cents: 199, description: "1 L", category_id: 6, quantity: 10 },
    SeedProduct { id: 16, name: "Fanta", price_cents: 199, description: "1 L", category_id: 6, quantity: 13 },
    SeedProduct { id: 17, name: "Diet Coke", price_cents: 250, description: "1 L", category_id: 6, quantity: 20 },
    SeedProduct { id: 18, name: "Diet Fanta", price_cents: 350, description: "1 L", category_id: 6, quantity: 25 },
    SeedProduct { id: 19, name: "Dish Wash Liquid", price_cents: 350, description: "500 ml", category_id: 7, quantity: 10 },
    SeedProduct { id: 20, name: "Dish Wash Scrub", price_cents: 150, description: "Per piece", category_id: 7, quantity: 40 },
    SeedProduct { id: 21, name: "Toothpaste", price_cents: 250, description: "Per piece", category_id: 8, quantity: 20 },
    SeedProduct { id: 22, name: "Toothbrush", price_cents: 450, description: "Per piece", category_id: 8, quantity: 25 },
    SeedProduct { id: 23, name: "Carpet Cleaner", price_cents: 550, description: "Per piece", category_id: 9, quantity: 5 },
    SeedProduct { id: 24, name: "Mop", price_cents: 1450, description: "Per piece", category_id: 9, quantity: 2 },
];

/// Per-row insertion times recorded by [`load`], in load order.
#[derive(Debug, Default, Clone)]
pub struct LoadReport {
    pub categories: Vec<(CategoryId, Duration)>,
    pub products: Vec<(ProductId, Duration)>,
}

impl LoadReport {
    pub fn total(&self) -> Duration {
        self.categories
            .iter()
            .map(|(_, d)| *d)
            .chain(self.products.iter().map(|(_, d)| *d))
            .sum()
    }
}

/// Load every sample category, then every sample product, timing each insert.
pub fn load(catalog: &mut Catalog) -> DomainResult<LoadReport> {
    let mut report = LoadReport::default();
    for c in CATEGORIES {
        let id = CategoryId::new(c.id);
        let (result, elapsed) = measure(|| catalog.add_category(id, c.name, c.status).map(|_| ()));
        result?;
        tracing::info!(
            category_id = c.id,
            name = c.name,
            elapsed_us = elapsed.as_micros() as u64,
            "category loaded"
        );
        report.categories.push((id, elapsed));
    }
    for p in PRODUCTS {
        let (result, elapsed) = measure(|| catalog.add_product(p.to_new_product()).map(|_| ()));
        result?;
        tracing::info!(
            product_id = p.id,
            name = p.name,
            elapsed_us = elapsed.as_micros() as u64,
            "product loaded"
        );
        report.products.push((ProductId::new(p.id), elapsed));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_loads_cleanly() {
        let mut catalog = Catalog::new();
        let report = load(&mut catalog).unwrap();
        assert_eq!(catalog.category_count(), CATEGORIES.len());
        assert_eq!(catalog.product_count(), PRODUCTS.len());

        let category_ids: Vec<u64> = report.categories.iter().map(|(id, _)| id.get()).collect();
        let expected: Vec<u64> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(category_ids, expected);
        let product_ids: Vec<u64> = report.products.iter().map(|(id, _)| id.get()).collect();
        let expected: Vec<u64> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(product_ids, expected);
        assert!(report.total() >= report.products[0].1);
        assert_eq!(
            catalog.product(ProductId::new(1)).unwrap().price(),
            Decimal::new(149, 2)
        );
    }

    #[test]
    fn loading_twice_fails_on_first_duplicate() {
        let mut catalog = Catalog::new();
        load(&mut catalog).unwrap();
        assert!(load(&mut catalog).is_err());
        assert_eq!(catalog.category_count(), CATEGORIES.len());
    }
}
