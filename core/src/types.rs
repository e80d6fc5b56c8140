//! Shared primitive types used across the crate.

/// A stable, unique identifier for one customer within a roster snapshot.
/// Ids are cohort-prefixed (`telecom-0007`) so a stale selection can never
/// silently land on a different cohort's row after a snapshot swap.
pub type CustomerId = String;

/// Key naming a cohort in the catalog (e.g. `telecom`).
pub type CohortId = String;
