//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// The kind of entity an error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Category,
    Product,
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EntityKind::Category => f.write_str("category"),
            EntityKind::Product => f.write_str("product"),
        }
    }
}

/// Domain-level error.
///
/// Every variant is a deterministic business failure. Operations that can fail
/// check all of their preconditions before touching state, so an `Err` always
/// leaves the catalog unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity with this identifier already exists.
    #[error("{kind} {id} already exists")]
    DuplicateId { kind: EntityKind, id: u64 },

    /// No entity with this identifier exists.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u64 },

    /// A referenced entity does not exist (e.g. product created with an unknown category).
    #[error("invalid reference to {kind} {id}")]
    InvalidReference { kind: EntityKind, id: u64 },

    /// A value failed validation (e.g. negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A category cannot be removed while products still reference it.
    #[error("category {id} is still referenced by {products} product(s)")]
    CategoryInUse { id: u64, products: usize },

    /// A shared catalog lock was poisoned by a panicking writer.
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

impl DomainError {
    pub fn duplicate(kind: EntityKind, id: impl Into<u64>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    pub fn not_found(kind: EntityKind, id: impl Into<u64>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn invalid_reference(kind: EntityKind, id: impl Into<u64>) -> Self {
        Self::InvalidReference {
            kind,
            id: id.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity_and_id() {
        assert_eq!(
            DomainError::duplicate(EntityKind::Category, 3u64).to_string(),
            "category 3 already exists"
        );
        assert_eq!(
            DomainError::not_found(EntityKind::Product, 7u64).to_string(),
            "product 7 not found"
        );
        assert_eq!(
            DomainError::invalid_reference(EntityKind::Category, 404u64).to_string(),
            "invalid reference to category 404"
        );
    }
}
