use serde::{Deserialize, Serialize};

use cargobay_core::{CargoId, CoreResult, Entity, ensure_non_negative};

/// A cargo unit offered to the planner.
///
/// Constructed by the caller per planning request; the planner never retains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoUnit {
    pub id: CargoId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Kilograms.
    pub weight: f64,
    /// Cubic meters.
    pub volume: f64,
    #[serde(default)]
    pub fragile: bool,
}

impl CargoUnit {
    pub fn new(id: CargoId, name: impl Into<String>, weight: f64, volume: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            category: None,
            weight,
            volume,
            fragile: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn fragile(mut self) -> Self {
        self.fragile = true;
        self
    }

    pub(crate) fn validate(&self) -> CoreResult<()> {
        ensure_non_negative("weight", self.weight)?;
        ensure_non_negative("volume", self.volume)
    }
}

impl Entity for CargoUnit {
    type Id = CargoId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cargobay_core::CoreError;

    #[test]
    fn builder_sets_optional_fields() {
        let unit = CargoUnit::new(CargoId::new(), "Laptop", 2.5, 0.01)
            .with_description("Dell Inspiron 15")
            .with_category("Electronics")
            .fragile();

        assert!(unit.fragile);
        assert_eq!(unit.category.as_deref(), Some("Electronics"));
        assert_eq!(unit.description.as_deref(), Some("Dell Inspiron 15"));
    }

    #[test]
    fn negative_measures_are_invalid() {
        let heavy = CargoUnit::new(CargoId::new(), "Books", -5.0, 0.02);
        assert!(matches!(heavy.validate(), Err(CoreError::InvalidInput(_))));

        let bulky = CargoUnit::new(CargoId::new(), "Books", 5.0, f64::NAN);
        assert!(matches!(bulky.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let id = CargoId::new();
        let json = format!(r#"{{"id":"{id}","name":"Books","weight":5.0,"volume":0.02}}"#);
        let unit: CargoUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(unit, CargoUnit::new(id, "Books", 5.0, 0.02));
    }
}
