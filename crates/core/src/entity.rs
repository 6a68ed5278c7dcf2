//! Identity for tracked things (cargo units, inventory units).

/// Something addressed by a stable identifier rather than by its fields.
///
/// Two inventory units with the same id are the same unit even after their
/// remaining uses diverge.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
