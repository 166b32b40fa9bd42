//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are never mutated in place; a price
/// history entry, for instance, is only ever appended, never edited.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceChange { sequence: u64, price: Decimal }
///
/// impl ValueObject for PriceChange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
