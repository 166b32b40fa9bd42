use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use stockroom_catalog::{Catalog, CategoryPatch, NewProduct, ProductPatch};
use stockroom_core::{CategoryId, Clock, DomainError, EntityKind, ProductId};

/// Clock that advances one second per reading.
#[derive(Debug)]
struct TickingClock {
    start: DateTime<Utc>,
    ticks: std::sync::atomic::AtomicI64,
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self
            .ticks
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.start + Duration::seconds(n)
    }
}

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap()
}

fn ticking_catalog() -> Catalog {
    Catalog::with_clock(Arc::new(TickingClock {
        start: start(),
        ticks: Default::default(),
    }))
}

fn spinach_catalog() -> Catalog {
    let mut catalog = ticking_catalog();
    catalog
        .add_category(CategoryId::new(1), "Vegetables", true)
        .unwrap();
    catalog
        .add_product(NewProduct {
            id: ProductId::new(1),
            name: "Spinach".to_string(),
            price: d("1.49"),
            description: "desc".to_string(),
            category_id: CategoryId::new(1),
            quantity: 100,
        })
        .unwrap();
    catalog
}

#[test]
fn price_update_then_quantity_adjustments() {
    let mut catalog = spinach_catalog();
    let id = ProductId::new(1);

    catalog.update_product(id, ProductPatch::price(d("1.99"))).unwrap();
    let product = catalog.product(id).unwrap();
    assert_eq!(product.price(), d("1.99"));

    let history = catalog.get_product_price_history(id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].price, d("1.49"));
    assert_eq!(history[1].price, d("1.99"));
    assert!(history[0].changed_at < history[1].changed_at);

    assert_eq!(catalog.increase_product_quantity(id, 25).unwrap(), 125);
    assert_eq!(catalog.decrease_product_quantity(id, 5).unwrap(), 120);
    assert_eq!(catalog.product(id).unwrap().quantity(), 120);
}

#[test]
fn add_product_with_missing_category_is_invalid_reference() {
    let mut catalog = spinach_catalog();
    let err = catalog
        .add_product(NewProduct {
            id: ProductId::new(99),
            name: "X".to_string(),
            price: d("1.0"),
            description: "d".to_string(),
            category_id: CategoryId::new(404),
            quantity: 1,
        })
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidReference {
            kind: EntityKind::Category,
            id: 404
        }
    );
    assert_eq!(catalog.product_count(), 1);
}

#[test]
fn repeated_same_price_does_not_grow_history() {
    let mut catalog = spinach_catalog();
    let id = ProductId::new(1);
    for price in ["1.99", "1.99", "1.990", "2.49", "2.49", "1.49"] {
        catalog.update_product(id, ProductPatch::price(d(price))).unwrap();
    }
    let prices: Vec<_> = catalog
        .get_product_price_history(id)
        .unwrap()
        .iter()
        .map(|c| c.price)
        .collect();
    assert_eq!(prices, vec![d("1.49"), d("1.99"), d("2.49"), d("1.49")]);
}

#[test]
fn quantity_round_trip_through_negative() {
    let mut catalog = spinach_catalog();
    let id = ProductId::new(1);
    assert_eq!(catalog.decrease_product_quantity(id, 250).unwrap(), -150);
    assert_eq!(catalog.increase_product_quantity(id, 250).unwrap(), 100);
}

#[test]
fn category_rename_is_seen_by_product_view_and_search() {
    let mut catalog = spinach_catalog();
    catalog
        .update_category(CategoryId::new(1), CategoryPatch::rename("Produce"))
        .unwrap();

    let found = catalog.search_category_by_name("produce");
    assert_eq!(found.len(), 1);

    let view = catalog.product_view(ProductId::new(1)).unwrap();
    assert!(view.to_string().ends_with("Category: Produce"));
    assert_eq!(catalog.search_product_by_category_name("PRODUCE").len(), 1);
}

#[test]
fn snapshot_serializes_both_tables() {
    let mut catalog = spinach_catalog();
    catalog
        .update_product(ProductId::new(1), ProductPatch::price(d("1.99")))
        .unwrap();

    let json = serde_json::to_value(catalog.snapshot()).unwrap();
    assert_eq!(json["categories"][0]["name"], "Vegetables");
    assert_eq!(json["products"][0]["name"], "Spinach");
    assert_eq!(
        json["products"][0]["price_history"].as_array().unwrap().len(),
        2
    );
}
