//! Live inventory ledger.
//!
//! Owns every live [`InventoryUnit`] behind a single lock. Mutations
//! (`create`, `use_unit`, `remove`) take the write lock for their whole
//! check-then-act sequence; aggregate reads take the read lock, so they never
//! observe a partially applied mutation.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

use cargobay_core::{CoreError, CoreResult, Entity, InventoryItemId};

use crate::config::LedgerConfig;
use crate::item::{InventoryUnit, NewInventoryUnit};
use crate::placement::{PlacementCatalog, PlacementReport, group_by_category};

/// Informational signal raised when a unit is nearing its usage limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageAlert {
    pub item_id: InventoryItemId,
    pub name: String,
    pub remaining_uses: u32,
    pub usage_limit: u32,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Result of a successful `use_unit` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageOutcome {
    pub unit: InventoryUnit,
    pub message: String,
    pub alert: Option<UsageAlert>,
}

/// Aggregate totals across all live units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StorageStatus {
    pub total_volume: f64,
    pub total_mass: f64,
}

/// Insertion-ordered live set.
#[derive(Debug, Default)]
struct LiveSet {
    order: Vec<InventoryItemId>,
    units: HashMap<InventoryItemId, InventoryUnit>,
}

impl LiveSet {
    fn iter(&self) -> impl Iterator<Item = &InventoryUnit> {
        self.order.iter().filter_map(|id| self.units.get(id))
    }
}

#[derive(Debug, Default)]
pub struct InventoryLedger {
    config: LedgerConfig,
    live: RwLock<LiveSet>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            live: RwLock::new(LiveSet::default()),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Register a new unit. Fails without mutation on a duplicate id or invalid request.
    pub fn create(&self, request: NewInventoryUnit) -> CoreResult<InventoryUnit> {
        request.validate()?;

        let mut live = self.live.write().map_err(|_| CoreError::Poisoned)?;
        if live.units.contains_key(&request.id) {
            tracing::debug!(item_id = %request.id, "rejected duplicate inventory id");
            return Err(CoreError::duplicate(request.id.as_str()));
        }

        let unit = InventoryUnit::from_request(request);
        let id = unit.id().clone();
        tracing::debug!(
            item_id = %id,
            category = unit.category(),
            volume = unit.volume(),
            usage_limit = unit.usage_limit(),
            "inventory unit created"
        );

        live.order.push(id.clone());
        live.units.insert(id, unit.clone());
        Ok(unit)
    }

    /// Consume one use of a unit.
    ///
    /// The near-limit check runs after every successful decrement, so once the
    /// threshold is crossed each further use raises an alert again.
    pub fn use_unit(&self, id: &InventoryItemId) -> CoreResult<UsageOutcome> {
        let mut live = self.live.write().map_err(|_| CoreError::Poisoned)?;
        let unit = live
            .units
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found(id.as_str()))?;

        unit.consume()?;

        let message = format!(
            "Used '{}'. Remaining uses: {}",
            unit.name(),
            unit.remaining_uses()
        );
        let alert = unit
            .is_near_limit(self.config.alert_ratio)
            .then(|| UsageAlert {
                item_id: id.clone(),
                name: unit.name().to_string(),
                remaining_uses: unit.remaining_uses(),
                usage_limit: unit.usage_limit(),
                message: format!("Alert: '{}' is nearing its usage limit.", unit.name()),
                raised_at: Utc::now(),
            });

        match &alert {
            Some(a) => tracing::warn!(
                item_id = %id,
                remaining_uses = a.remaining_uses,
                usage_limit = a.usage_limit,
                "{}",
                a.message
            ),
            None => tracing::debug!(item_id = %id, remaining_uses = unit.remaining_uses(), "inventory unit used"),
        }

        Ok(UsageOutcome {
            unit: unit.clone(),
            message,
            alert,
        })
    }

    /// Snapshot of one unit.
    pub fn get(&self, id: &InventoryItemId) -> CoreResult<InventoryUnit> {
        let live = self.live.read().map_err(|_| CoreError::Poisoned)?;
        live.units
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(id.as_str()))
    }

    /// Drop a unit from the live set, returning its final state.
    pub fn remove(&self, id: &InventoryItemId) -> CoreResult<InventoryUnit> {
        let mut live = self.live.write().map_err(|_| CoreError::Poisoned)?;
        let unit = live
            .units
            .remove(id)
            .ok_or_else(|| CoreError::not_found(id.as_str()))?;
        live.order.retain(|k| k != id);
        tracing::debug!(item_id = %id, "inventory unit removed");
        Ok(unit)
    }

    /// Total derived volume and mass of all live units.
    pub fn status(&self) -> CoreResult<StorageStatus> {
        let live = self.live.read().map_err(|_| CoreError::Poisoned)?;
        Ok(live.iter().fold(StorageStatus::default(), |acc, unit| StorageStatus {
            total_volume: acc.total_volume + unit.volume(),
            total_mass: acc.total_mass + unit.mass(),
        }))
    }

    /// Snapshot of all live units in creation order.
    pub fn list(&self) -> CoreResult<Vec<InventoryUnit>> {
        let live = self.live.read().map_err(|_| CoreError::Poisoned)?;
        Ok(live.iter().cloned().collect())
    }

    pub fn suggest_placement(&self) -> CoreResult<PlacementReport> {
        let live = self.live.read().map_err(|_| CoreError::Poisoned)?;
        Ok(group_by_category(live.iter()))
    }

    /// Preferred storage zones for a live unit, looked up by its name.
    pub fn recommend_zones(&self, id: &InventoryItemId) -> CoreResult<&'static [&'static str]> {
        let unit = self.get(id)?;
        Ok(PlacementCatalog.zones_for(unit.name()))
    }

    pub fn len(&self) -> usize {
        self.live.read().map(|live| live.units.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
