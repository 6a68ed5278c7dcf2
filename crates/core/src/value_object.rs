//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values,
/// e.g. the `Dimensions` of an inventory unit or the projected row of a cargo
/// report. Once built they are not mutated; a "change" produces a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
