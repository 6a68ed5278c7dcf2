//! Planner configuration.

use serde::{Deserialize, Serialize};

/// Environment variable selecting the planner tie-break (`input` or `id`).
pub const TIE_BREAK_ENV: &str = "CARGOBAY_PLANNER_TIE_BREAK";

/// Ordering applied to units whose `(weight, volume)` keys are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the caller's order (stable sort).
    #[default]
    InputOrder,
    /// Order by cargo identifier.
    Identifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub tie_break: TieBreak,
}

impl PlannerConfig {
    /// Read configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        let raw = std::env::var(TIE_BREAK_ENV).ok();
        Self {
            tie_break: parse_tie_break(raw.as_deref()),
        }
    }
}

fn parse_tie_break(raw: Option<&str>) -> TieBreak {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("input") => TieBreak::InputOrder,
        Some("id") => TieBreak::Identifier,
        Some(other) => {
            tracing::warn!(value = other, "ignoring invalid {TIE_BREAK_ENV}");
            TieBreak::InputOrder
        }
    }
}
