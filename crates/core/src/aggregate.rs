//! Aggregate root trait for domain models that own an append-only history.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the only entry point for changing the records it owns.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// For history-backed aggregates this is the number of records appended so
    /// far, so two observations with equal versions saw the same state.
    fn version(&self) -> u64;
}
