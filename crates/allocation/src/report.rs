//! Boundary projection of planner output.
//!
//! Only `id`, `name`, `weight` and `volume` leave the core; description,
//! category and fragility stay internal.

use serde::{Deserialize, Serialize};

use cargobay_core::{CargoId, ValueObject};

use crate::cargo::CargoUnit;
use crate::planner::AllocationPlan;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoRow {
    pub id: CargoId,
    pub name: String,
    pub weight: f64,
    pub volume: f64,
}

impl ValueObject for CargoRow {}

impl From<&CargoUnit> for CargoRow {
    fn from(unit: &CargoUnit) -> Self {
        Self {
            id: unit.id,
            name: unit.name.clone(),
            weight: unit.weight,
            volume: unit.volume,
        }
    }
}

/// Response shape for a planning call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub optimized_cargo: Vec<CargoRow>,
    pub total_weight: f64,
    pub total_volume: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    /// Project a selection to its external rows, preserving order.
    pub fn project(&self, selection: &[CargoUnit]) -> Vec<CargoRow> {
        selection.iter().map(CargoRow::from).collect()
    }

    pub fn report(&self, plan: &AllocationPlan) -> AllocationReport {
        AllocationReport {
            optimized_cargo: self.project(&plan.selected),
            total_weight: plan.total_weight,
            total_volume: plan.total_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projection_drops_internal_fields() {
        let id = CargoId::new();
        let unit = CargoUnit::new(id, "Laptop", 2.5, 0.01)
            .with_description("Dell Inspiron 15")
            .with_category("Electronics")
            .fragile();

        let rows = ReportFormatter.project(std::slice::from_ref(&unit));
        assert_eq!(
            serde_json::to_value(&rows).unwrap(),
            json!([{ "id": id.to_string(), "name": "Laptop", "weight": 2.5, "volume": 0.01 }])
        );
    }

    #[test]
    fn report_carries_totals() {
        let units = vec![
            CargoUnit::new(CargoId::new(), "Books", 5.0, 0.02),
            CargoUnit::new(CargoId::new(), "Laptop", 2.5, 0.01),
        ];
        let plan = AllocationPlan {
            selected: units.clone(),
            total_weight: 7.5,
            total_volume: 0.03,
        };

        let report = ReportFormatter.report(&plan);
        assert_eq!(report.total_weight, 7.5);
        assert_eq!(report.total_volume, 0.03);
        let names: Vec<_> = report.optimized_cargo.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Books", "Laptop"]);
    }

    #[test]
    fn empty_selection_projects_to_nothing() {
        assert!(ReportFormatter.project(&[]).is_empty());
        let report = ReportFormatter.report(&AllocationPlan::default());
        assert!(report.optimized_cargo.is_empty());
        assert_eq!(report.total_weight, 0.0);
    }
}
