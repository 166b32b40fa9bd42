use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use stockroom_core::{
    CategoryId, Clock, DomainError, DomainResult, Entity, EntityKind, ProductId, SystemClock,
};

use crate::category::{Category, CategoryPatch};
use crate::product::{PriceChange, Product, ProductPatch, ProductView};
use crate::table::Table;

/// Input for [`Catalog::add_product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category_id: CategoryId,
    pub quantity: i64,
}

/// Aggregate root owning every category and product.
///
/// Products hold only the id of their category and resolve it through the
/// catalog when read, so renaming a category is visible from every product
/// bound to it. A category cannot be deleted while a product references it.
#[derive(Debug)]
pub struct Catalog {
    categories: Table<CategoryId, Category>,
    products: Table<ProductId, Product>,
    clock: Arc<dyn Clock>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog stamping price changes with system time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            categories: Table::default(),
            products: Table::default(),
            clock,
        }
    }

    // ---------------------------------------------------------------------
    // Categories
    // ---------------------------------------------------------------------

    pub fn is_category_id_unique(&self, id: CategoryId) -> bool {
        !self.categories.contains(&id)
    }

    pub fn add_category(
        &mut self,
        id: CategoryId,
        name: impl Into<String>,
        status: bool,
    ) -> DomainResult<&Category> {
        if !self.is_category_id_unique(id) {
            return Err(DomainError::duplicate(EntityKind::Category, id));
        }
        let category = Category::new(id, name, status);
        tracing::debug!("category {} added ({})", id, category.name());
        self.categories.insert_new(category);
        self.category_or_not_found(id)
    }

    pub fn update_category(&mut self, id: CategoryId, patch: CategoryPatch) -> DomainResult<()> {
        let category = self
            .categories
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Category, id))?;
        category.update(patch);
        tracing::debug!("category {} updated", id);
        Ok(())
    }

    /// Remove a category.
    ///
    /// Fails with [`DomainError::CategoryInUse`] while any product is bound to it.
    pub fn delete_category(&mut self, id: CategoryId) -> DomainResult<Category> {
        if !self.categories.contains(&id) {
            return Err(DomainError::not_found(EntityKind::Category, id));
        }
        let referencing = self
            .products
            .values()
            .filter(|p| p.category_id() == id)
            .count();
        if referencing > 0 {
            return Err(DomainError::CategoryInUse {
                id: id.get(),
                products: referencing,
            });
        }
        let removed = self
            .categories
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Category, id))?;
        tracing::debug!("category {} deleted", id);
        Ok(removed)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.values()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    fn category_or_not_found(&self, id: CategoryId) -> DomainResult<&Category> {
        self.categories
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Category, id))
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    pub fn is_product_id_unique(&self, id: ProductId) -> bool {
        !self.products.contains(&id)
    }

    /// Add a product bound to an existing category.
    ///
    /// The price history starts with the initial price at the clock's current time.
    pub fn add_product(&mut self, new: NewProduct) -> DomainResult<&Product> {
        if !self.is_product_id_unique(new.id) {
            return Err(DomainError::duplicate(EntityKind::Product, new.id));
        }
        if !self.categories.contains(&new.category_id) {
            return Err(DomainError::invalid_reference(
                EntityKind::Category,
                new.category_id,
            ));
        }
        ensure_price(new.price)?;

        let id = new.id;
        let product = Product::new(
            new.id,
            new.name,
            new.price,
            new.description,
            new.category_id,
            new.quantity,
            self.clock.now(),
        );
        tracing::debug!(
            "product {} added ({}, category {})",
            id,
            product.name(),
            product.category_id()
        );
        self.products.insert_new(product);
        self.product_or_not_found(id)
    }

    /// Apply a partial update to a product.
    ///
    /// A supplied `category_id` that does not exist is ignored and the product
    /// keeps its current category; this is logged at `warn`, not returned as an error.
    pub fn update_product(&mut self, id: ProductId, mut patch: ProductPatch) -> DomainResult<()> {
        if !self.products.contains(&id) {
            return Err(DomainError::not_found(EntityKind::Product, id));
        }
        if let Some(price) = patch.price {
            ensure_price(price)?;
        }
        if let Some(category_id) = patch.category_id {
            if !self.categories.contains(&category_id) {
                tracing::warn!(
                    "product {}: unknown category {}; keeping current category",
                    id,
                    category_id
                );
                patch.category_id = None;
            }
        }

        let at = self.clock.now();
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, id))?;
        product.update(patch, at);
        tracing::debug!("product {} updated", id);
        Ok(())
    }

    /// Remove a product, returning it.
    pub fn delete_product(&mut self, id: ProductId) -> DomainResult<Product> {
        let removed = self
            .products
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, id))?;
        tracing::debug!("product {} deleted", id);
        Ok(removed)
    }

    pub fn increase_product_quantity(&mut self, id: ProductId, amount: i64) -> DomainResult<i64> {
        let product = self.product_mut(id)?;
        product.increase_quantity(amount);
        Ok(log_quantity(product))
    }

    pub fn decrease_product_quantity(&mut self, id: ProductId, amount: i64) -> DomainResult<i64> {
        let product = self.product_mut(id)?;
        product.decrease_quantity(amount);
        Ok(log_quantity(product))
    }

    /// Read-only view of a product's price history, oldest first.
    pub fn get_product_price_history(&self, id: ProductId) -> DomainResult<&[PriceChange]> {
        Ok(self.product_or_not_found(id)?.price_history())
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Resolve a product together with its category.
    pub fn product_view(&self, id: ProductId) -> DomainResult<ProductView<'_>> {
        let product = self.product_or_not_found(id)?;
        self.view_of(product)
    }

    /// Products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Serializable copy-free view of the whole catalog.
    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            categories: self.categories().collect(),
            products: self.products().collect(),
        }
    }

    /// Pair `product` with its category for display.
    pub fn view_of<'a>(&'a self, product: &'a Product) -> DomainResult<ProductView<'a>> {
        let category = self
            .categories
            .get(&product.category_id())
            .ok_or_else(|| {
                DomainError::invalid_reference(EntityKind::Category, product.category_id())
            })?;
        Ok(ProductView { product, category })
    }

    fn product_or_not_found(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, id))
    }

    fn product_mut(&mut self, id: ProductId) -> DomainResult<&mut Product> {
        self.products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, id))
    }
}

/// Borrowed, serializable view of a catalog.
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub categories: Vec<&'a Category>,
    pub products: Vec<&'a Product>,
}

impl core::fmt::Display for Catalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Categories:")?;
        for category in self.categories() {
            writeln!(f, "  {category}")?;
        }
        writeln!(f, "Products:")?;
        for product in self.products() {
            match self.view_of(product) {
                Ok(view) => writeln!(f, "  {view}")?,
                Err(_) => writeln!(f, "  Product Id: {} (unresolved category)", product.id())?,
            }
        }
        Ok(())
    }
}

fn ensure_price(price: Decimal) -> DomainResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(DomainError::validation(format!(
            "price cannot be negative (got {price})"
        )));
    }
    Ok(())
}

fn log_quantity(product: &Product) -> i64 {
    let quantity = product.quantity();
    if quantity < 0 {
        tracing::debug!("product {} quantity is negative ({})", product.id(), quantity);
    } else {
        tracing::debug!("product {} quantity now {}", product.id(), quantity);
    }
    quantity
}
