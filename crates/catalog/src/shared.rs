//! Thread-safe handle around a single [`Catalog`].
//!
//! `Catalog` itself is a plain single-threaded structure. Callers that need to
//! share one across threads go through this handle, which serializes writers
//! behind one lock per catalog. A closure passed to [`SharedCatalog::write`]
//! runs as a single critical section, so check-then-insert sequences cannot
//! interleave with other writers.

use std::sync::{Arc, RwLock};

use stockroom_core::{DomainError, DomainResult};

use crate::catalog::Catalog;

#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Run `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> DomainResult<R> {
        let guard = self.inner.read().map_err(|_| DomainError::LockPoisoned)?;
        Ok(f(&*guard))
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> DomainResult<R>) -> DomainResult<R> {
        let mut guard = self.inner.write().map_err(|_| DomainError::LockPoisoned)?;
        f(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NewProduct;
    use stockroom_core::{CategoryId, ProductId};

    #[test]
    fn concurrent_writers_see_each_other() {
        let shared = SharedCatalog::default();
        shared
            .write(|c| c.add_category(CategoryId::new(1), "Drinks", true).map(|_| ()))
            .unwrap();
        shared
            .write(|c| {
                c.add_product(NewProduct {
                    id: ProductId::new(1),
                    name: "Coke".to_string(),
                    price: "1.99".parse().unwrap(),
                    description: "1 L".to_string(),
                    category_id: CategoryId::new(1),
                    quantity: 0,
                })
                .map(|_| ())
            })
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        shared
                            .write(|c| c.increase_product_quantity(ProductId::new(1), 1))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let quantity = shared
            .read(|c| c.product(ProductId::new(1)).map(|p| p.quantity()))
            .unwrap();
        assert_eq!(quantity, Some(800));
    }

    #[test]
    fn uniqueness_check_and_insert_are_atomic() {
        let shared = SharedCatalog::default();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    shared.write(|c| {
                        c.add_category(CategoryId::new(1), format!("writer {i}"), true)
                            .map(|_| ())
                    })
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();
        assert_eq!(successes, 1);
        assert_eq!(shared.read(|c| c.category_count()).unwrap(), 1);
    }
}
