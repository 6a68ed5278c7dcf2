//! Ledger configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`LedgerConfig::alert_ratio`].
pub const ALERT_RATIO_ENV: &str = "CARGOBAY_ALERT_RATIO";

/// Default share of the usage limit at or below which a unit is "nearing its limit".
pub const DEFAULT_ALERT_RATIO: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub alert_ratio: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            alert_ratio: DEFAULT_ALERT_RATIO,
        }
    }
}

impl LedgerConfig {
    /// Read configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        let raw = std::env::var(ALERT_RATIO_ENV).ok();
        Self {
            alert_ratio: parse_alert_ratio(raw.as_deref()),
        }
    }

    pub fn with_alert_ratio(mut self, alert_ratio: f64) -> Self {
        self.alert_ratio = alert_ratio;
        self
    }
}

fn parse_alert_ratio(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return DEFAULT_ALERT_RATIO;
    };
    match raw.trim().parse::<f64>() {
        Ok(ratio) if ratio.is_finite() && (0.0..=1.0).contains(&ratio) => ratio,
        _ => {
            tracing::warn!(
                value = raw,
                default = DEFAULT_ALERT_RATIO,
                "ignoring invalid {ALERT_RATIO_ENV}"
            );
            DEFAULT_ALERT_RATIO
        }
    }
}
