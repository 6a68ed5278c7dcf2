//! Greedy dual-budget allocation.
//!
//! Candidates are ordered ascending by `(weight, volume)` and walked once; a
//! unit is accepted when both running totals stay within budget, otherwise it
//! is skipped for good. This is a heuristic, not a knapsack solve: the
//! selection can be worse than an optimal subset and that is expected.

use core::cmp::Ordering;

use serde::Serialize;
use tracing::instrument;

use cargobay_core::{CoreResult, ensure_non_negative};

use crate::cargo::CargoUnit;
use crate::config::{PlannerConfig, TieBreak};

/// Units accepted by one planning call, in acceptance order, with final totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AllocationPlan {
    pub selected: Vec<CargoUnit>,
    pub total_weight: f64,
    pub total_volume: f64,
}

impl AllocationPlan {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Stateless planner; every call is independent and needs no locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationPlanner {
    config: PlannerConfig,
}

impl AllocationPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Select the units that fit within `max_weight` and `max_volume`.
    ///
    /// Inputs are validated up front: a negative or non-finite budget, weight
    /// or volume fails the call before any selection happens. A unit that
    /// alone exceeds a budget is simply skipped.
    #[instrument(skip(self, units), fields(candidates = units.len()))]
    pub fn plan(&self, units: &[CargoUnit], max_weight: f64, max_volume: f64) -> CoreResult<AllocationPlan> {
        ensure_non_negative("max_weight", max_weight)?;
        ensure_non_negative("max_volume", max_volume)?;
        for unit in units {
            unit.validate()?;
        }

        let mut ordered: Vec<&CargoUnit> = units.iter().collect();
        let tie_break = self.config.tie_break;
        // `sort_by` is stable, so equal keys keep input order unless ids break the tie.
        ordered.sort_by(|a, b| {
            compare_load(a, b).then_with(|| match tie_break {
                TieBreak::InputOrder => Ordering::Equal,
                TieBreak::Identifier => a.id.cmp(&b.id),
            })
        });

        let mut plan = AllocationPlan::default();
        for unit in ordered {
            if plan.total_weight + unit.weight <= max_weight && plan.total_volume + unit.volume <= max_volume {
                plan.total_weight += unit.weight;
                plan.total_volume += unit.volume;
                plan.selected.push(unit.clone());
            }
        }

        tracing::debug!(
            selected = plan.selected.len(),
            total_weight = plan.total_weight,
            total_volume = plan.total_volume,
            "allocation planned"
        );
        Ok(plan)
    }
}

/// Weight first, volume as tie-break. Inputs are validated finite beforehand.
fn compare_load(a: &CargoUnit, b: &CargoUnit) -> Ordering {
    a.weight
        .partial_cmp(&b.weight)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.volume.partial_cmp(&b.volume).unwrap_or(Ordering::Equal))
}
