//! Domain error model.

use thiserror::Error;

/// Result type used across the cargo bay core.
pub type CoreResult<T> = Result<T, CoreError>;

/// Core-level error.
///
/// Every failure is local to the call that produced it: shared state is left
/// untouched on every error path, and nothing here is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An entity with the same identifier already exists.
    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    /// The requested identifier is not present.
    #[error("not found: {0}")]
    NotFound(String),

    /// The unit has no remaining uses.
    #[error("item '{name}' ({id}) has reached its usage limit")]
    LimitExhausted { id: String, name: String },

    /// A value failed validation (negative measure, bad budget, empty name).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Shared state was poisoned by a panicking lock holder.
    #[error("internal state poisoned")]
    Poisoned,
}

impl CoreError {
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateIdentifier(id.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn exhausted(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::LimitExhausted {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Reject negative and non-finite measures (weights, volumes, budgets, dimensions).
pub fn ensure_non_negative(field: &str, value: f64) -> CoreResult<()> {
    if !value.is_finite() {
        return Err(CoreError::invalid_input(format!("{field} must be finite (got {value})")));
    }
    if value < 0.0 {
        return Err(CoreError::invalid_input(format!("{field} cannot be negative (got {value})")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero_and_positive() {
        assert!(ensure_non_negative("weight", 0.0).is_ok());
        assert!(ensure_non_negative("weight", 12.5).is_ok());
    }

    #[test]
    fn non_negative_rejects_negative_and_nan() {
        match ensure_non_negative("volume", -0.01) {
            Err(CoreError::InvalidInput(msg)) if msg.contains("volume") => {}
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert!(matches!(
            ensure_non_negative("volume", f64::NAN),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            ensure_non_negative("volume", f64::INFINITY),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn exhausted_message_names_the_item() {
        let err = CoreError::exhausted("o2-1", "Oxygen Cylinder");
        assert_eq!(
            err.to_string(),
            "item 'Oxygen Cylinder' (o2-1) has reached its usage limit"
        );
    }
}
