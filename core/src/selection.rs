//! Selection state machine.
//!
//! Keeps a single selected-row identifier consistent against a roster
//! snapshot that can be swapped out from under it. Two states:
//!
//!   Empty        : no row to evaluate (valid, not an error)
//!   Resolved(id) : id is present in the current snapshot
//!
//! Transitions, all re-derived synchronously from the new snapshot:
//!   Empty       -> Resolved(first)  when a non-empty snapshot loads
//!   Resolved(x) -> Resolved(x)      when x remains valid
//!   Resolved(x) -> Resolved(first)  when x is no longer present
//!   Resolved(x) -> Empty            when the snapshot is empty
//!
//! RULE: resolve on every snapshot transition, before any scoring.
//! A selection is never carried across a swap by reference.

use crate::types::CustomerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "customer_id", rename_all = "snake_case")]
pub enum Selection {
    Resolved(CustomerId),
    Empty,
}

impl Selection {
    pub fn resolved_id(&self) -> Option<&str> {
        match self {
            Self::Resolved(id) => Some(id),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Re-derive this selection against the ids of a (possibly new)
    /// snapshot. Pure transition function; the receiver is untouched.
    pub fn apply_snapshot(&self, valid_ids: &[CustomerId]) -> Selection {
        resolve_selection(valid_ids, self.resolved_id())
    }
}

/// Resolve a requested id (possibly stale or absent) against the current
/// snapshot's ids. Never fails: an empty snapshot resolves to `Empty`,
/// a missing id falls back to the first row in snapshot order.
pub fn resolve_selection(valid_ids: &[CustomerId], requested: Option<&str>) -> Selection {
    if let Some(req) = requested {
        if valid_ids.iter().any(|id| id == req) {
            return Selection::Resolved(req.to_string());
        }
    }
    match valid_ids.first() {
        Some(first) => Selection::Resolved(first.clone()),
        None => Selection::Empty,
    }
}
