use serde::{Deserialize, Serialize};

use cargobay_core::{CoreError, CoreResult, Entity, InventoryItemId, ValueObject, ensure_non_negative};

/// Physical extent of an inventory unit.
///
/// A zero or absent `height` describes a flat 2-D footprint.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: Option<f64>,
    pub depth: f64,
}

impl ValueObject for Dimensions {}

impl Dimensions {
    pub fn new(width: f64, height: Option<f64>, depth: f64) -> Self {
        Self { width, height, depth }
    }

    /// `width * height * depth` when height is positive, otherwise the
    /// footprint area `width * depth`.
    pub fn volume(&self) -> f64 {
        match self.height {
            Some(height) if height > 0.0 => self.width * height * self.depth,
            _ => self.width * self.depth,
        }
    }

    fn validate(&self) -> CoreResult<()> {
        ensure_non_negative("width", self.width)?;
        if let Some(height) = self.height {
            ensure_non_negative("height", height)?;
        }
        ensure_non_negative("depth", self.depth)
    }
}

/// Sensor reading attached to a unit. Set to `Nominal` at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    #[default]
    Nominal,
    Degraded,
    Offline,
}

/// Creation request for an inventory unit, already type-checked by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInventoryUnit {
    pub id: InventoryItemId,
    pub name: String,
    pub category: String,
    pub location: String,
    pub dimensions: Dimensions,
    pub mass: f64,
    pub usage_limit: u32,
}

impl NewInventoryUnit {
    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::invalid_input("name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(CoreError::invalid_input("category cannot be empty"));
        }
        self.dimensions.validate()?;
        ensure_non_negative("mass", self.mass)?;
        if self.usage_limit == 0 {
            return Err(CoreError::invalid_input("usage_limit must be at least 1"));
        }
        Ok(())
    }
}

/// A tracked inventory unit.
///
/// Only the ledger constructs and mutates these; callers receive snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryUnit {
    id: InventoryItemId,
    name: String,
    category: String,
    location: String,
    dimensions: Dimensions,
    mass: f64,
    usage_limit: u32,
    remaining_uses: u32,
    volume: f64,
    sensor_status: SensorStatus,
}

impl InventoryUnit {
    /// Build a unit from a validated request. Volume is derived once, here.
    pub(crate) fn from_request(req: NewInventoryUnit) -> Self {
        let volume = req.dimensions.volume();
        Self {
            id: req.id,
            name: req.name,
            category: req.category,
            location: req.location,
            dimensions: req.dimensions,
            mass: req.mass,
            usage_limit: req.usage_limit,
            remaining_uses: req.usage_limit,
            volume,
            sensor_status: SensorStatus::Nominal,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn usage_limit(&self) -> u32 {
        self.usage_limit
    }

    pub fn remaining_uses(&self) -> u32 {
        self.remaining_uses
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn sensor_status(&self) -> SensorStatus {
        self.sensor_status
    }

    /// True once remaining uses are at or below `ratio` of the usage limit.
    pub fn is_near_limit(&self, ratio: f64) -> bool {
        f64::from(self.remaining_uses) <= ratio * f64::from(self.usage_limit)
    }

    /// Consume one use. Leaves the unit untouched when already exhausted.
    pub(crate) fn consume(&mut self) -> CoreResult<()> {
        if self.remaining_uses == 0 {
            return Err(CoreError::exhausted(self.id.as_str(), self.name.as_str()));
        }
        self.remaining_uses -= 1;
        Ok(())
    }
}

impl Entity for InventoryUnit {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(height: Option<f64>, usage_limit: u32) -> NewInventoryUnit {
        NewInventoryUnit {
            id: InventoryItemId::new("kit-1").unwrap(),
            name: "Tool Kit".to_string(),
            category: "Maintenance".to_string(),
            location: "Maintenance_Bay".to_string(),
            dimensions: Dimensions::new(2.0, height, 3.0),
            mass: 4.5,
            usage_limit,
        }
    }

    #[test]
    fn zero_height_uses_footprint_area() {
        assert_eq!(Dimensions::new(2.0, Some(0.0), 3.0).volume(), 6.0);
        assert_eq!(Dimensions::new(2.0, None, 3.0).volume(), 6.0);
        assert_eq!(Dimensions::new(2.0, Some(4.0), 3.0).volume(), 24.0);
    }

    #[test]
    fn new_unit_starts_full_and_nominal() {
        let unit = InventoryUnit::from_request(request(Some(0.5), 5));
        assert_eq!(unit.remaining_uses(), 5);
        assert_eq!(unit.usage_limit(), 5);
        assert_eq!(unit.volume(), 3.0);
        assert_eq!(unit.sensor_status(), SensorStatus::Nominal);
        assert_eq!(unit.id().as_str(), "kit-1");
    }

    #[test]
    fn consume_stops_at_zero() {
        let mut unit = InventoryUnit::from_request(request(None, 1));
        unit.consume().unwrap();
        assert_eq!(unit.remaining_uses(), 0);

        let err = unit.consume().unwrap_err();
        assert!(matches!(err, CoreError::LimitExhausted { .. }));
        assert_eq!(unit.remaining_uses(), 0);
    }

    #[test]
    fn validation_rejects_bad_requests() {
        assert!(matches!(
            request(None, 0).validate(),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            request(Some(-1.0), 3).validate(),
            Err(CoreError::InvalidInput(_))
        ));

        let mut heavy = request(None, 3);
        heavy.mass = -2.0;
        assert!(heavy.validate().is_err());

        let mut unnamed = request(None, 3);
        unnamed.name = "  ".to_string();
        assert!(unnamed.validate().is_err());

        assert!(request(Some(1.0), 3).validate().is_ok());
    }

    #[test]
    fn sensor_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SensorStatus::Nominal).unwrap(),
            "\"nominal\""
        );
    }
}
