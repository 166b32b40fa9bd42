//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog: the
//! error taxonomy, typed identifiers and a pluggable clock.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult, EntityKind};
pub use id::{CategoryId, ProductId};
pub use value_object::ValueObject;
