//! Inventory catalog (in-memory).
//!
//! This crate holds categories and products, enforces identifier uniqueness,
//! applies partial updates, records every price change and answers linear-scan
//! searches. It is pure domain logic: no IO, no persistence.

pub mod catalog;
pub mod category;
pub mod product;
pub mod search;
pub mod shared;

mod table;

pub use catalog::{Catalog, CatalogSnapshot, NewProduct};
pub use category::{Category, CategoryPatch};
pub use product::{PriceChange, Product, ProductPatch, ProductView};
pub use shared::SharedCatalog;
