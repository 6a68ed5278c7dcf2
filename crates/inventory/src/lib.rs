//! Inventory ledger for the cargo bay.
//!
//! Tracks per-unit remaining uses, derived volume and near-limit alerts, and
//! groups live units by category for placement. Pure domain logic: no IO, no
//! HTTP, no storage.

pub mod config;
pub mod item;
pub mod ledger;
pub mod placement;

pub use config::LedgerConfig;
pub use item::{Dimensions, InventoryUnit, NewInventoryUnit, SensorStatus};
pub use ledger::{InventoryLedger, StorageStatus, UsageAlert, UsageOutcome};
pub use placement::{CategorySuggestion, PlacementCatalog, PlacementReport};
