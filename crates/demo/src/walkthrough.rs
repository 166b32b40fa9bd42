//! Scripted tour of the catalog API over the sample data.
//!
//! Each step is timed; durations go to the log, narration goes to `out`.

use std::io::Write;

use anyhow::Context;
use rust_decimal::Decimal;
use stockroom_catalog::{Catalog, CategoryPatch, Product, ProductPatch};
use stockroom_core::{CategoryId, ProductId};

use crate::timing::timed;

fn write_products(out: &mut impl Write, catalog: &Catalog, products: &[&Product]) -> anyhow::Result<()> {
    if products.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for product in products {
        let view = catalog.view_of(product)?;
        writeln!(out, "  {view}")?;
    }
    Ok(())
}

pub fn run(catalog: &mut Catalog, out: &mut impl Write) -> anyhow::Result<()> {
    let produce = CategoryId::new(1);
    let electronics = CategoryId::new(10);
    let spinach = ProductId::new(1);

    writeln!(out, "== Categories")?;
    let before = catalog.category(produce).context("category 1 missing")?.to_string();
    timed("update_category", || {
        catalog.update_category(produce, CategoryPatch::rename("Produce"))
    })?;
    writeln!(out, "Before update: {before}")?;
    writeln!(out, "After update:  {}", catalog.category(produce).context("category 1 missing")?)?;

    timed("add_category", || catalog.add_category(electronics, "Electronics", true).map(|_| ()))?;
    for category in catalog.categories() {
        writeln!(out, "  {category}")?;
    }

    let found = timed("search_category_by_name", || catalog.search_category_by_name("Produce"));
    writeln!(out, "Search 'Produce': {} match(es)", found.len())?;
    for category in found {
        writeln!(out, "  {category}")?;
    }

    writeln!(
        out,
        "Before delete, 'Electronics' matches: {}",
        catalog.search_category_by_name("Electronics").len()
    )?;
    timed("delete_category", || catalog.delete_category(electronics))?;
    writeln!(
        out,
        "After delete, 'Electronics' matches: {}",
        catalog.search_category_by_name("Electronics").len()
    )?;

    writeln!(out, "== Products")?;
    writeln!(out, "Before update: {}", catalog.product_view(spinach)?)?;
    timed("update_product", || {
        catalog.update_product(spinach, ProductPatch::price(Decimal::new(199, 2)))
    })?;
    writeln!(out, "After update:  {}", catalog.product_view(spinach)?)?;

    let quantity = timed("increase_product_quantity", || {
        catalog.increase_product_quantity(spinach, 25)
    })?;
    writeln!(out, "Quantity after +25: {quantity}")?;
    let quantity = timed("decrease_product_quantity", || {
        catalog.decrease_product_quantity(spinach, 5)
    })?;
    writeln!(out, "Quantity after -5:  {quantity}")?;

    let history = timed("get_product_price_history", || catalog.get_product_price_history(spinach))?;
    writeln!(out, "Price history of product {spinach}:")?;
    for change in history {
        writeln!(out, "  #{} {} -> {}", change.sequence, change.changed_at.to_rfc3339(), change.price)?;
    }

    writeln!(out, "Search by name 'mustard greens':")?;
    let found = timed("search_product_by_name", || catalog.search_product_by_name("mustard greens"));
    write_products(out, catalog, &found)?;

    writeln!(out, "Search by price range 5.99..=10.99:")?;
    let found = timed("search_product_by_price_range", || {
        catalog.search_product_by_price_range(Decimal::new(599, 2), Decimal::new(1099, 2))
    });
    write_products(out, catalog, &found)?;

    writeln!(out, "Search by category id 1:")?;
    let found = timed("search_product_by_category_id", || catalog.search_product_by_category_id(produce));
    write_products(out, catalog, &found)?;

    writeln!(out, "Search by category name 'produce':")?;
    let found = timed("search_product_by_category_name", || {
        catalog.search_product_by_category_name("produce")
    });
    write_products(out, catalog, &found)?;

    Ok(())
}
