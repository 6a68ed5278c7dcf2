//! `cargobay-core` — shared building blocks for the cargo bay core.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{CoreError, CoreResult, ensure_non_negative};
pub use id::{CargoId, InventoryItemId};
pub use value_object::ValueObject;
