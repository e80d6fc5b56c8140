//! Selection resolution tests: the pure contract, the fixed point, and
//! all four legal state transitions.

use retention_core::selection::{resolve_selection, Selection};

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// A requested id that is present comes back unchanged.
#[test]
fn present_id_is_returned_unchanged() {
    let snapshot = ids(&["a", "b", "c"]);
    let resolved = resolve_selection(&snapshot, Some("b"));
    assert_eq!(resolved, Selection::Resolved("b".into()));
}

/// A stale id falls back to the first row in snapshot order.
#[test]
fn stale_id_falls_back_to_first_row() {
    let snapshot = ids(&["a", "b", "c"]);
    let resolved = resolve_selection(&snapshot, Some("z"));
    assert_eq!(resolved, Selection::Resolved("a".into()));
}

/// An empty snapshot resolves to Empty, for any request.
#[test]
fn empty_snapshot_resolves_to_empty() {
    let snapshot: Vec<String> = Vec::new();
    assert_eq!(resolve_selection(&snapshot, Some("a")), Selection::Empty);
    assert_eq!(resolve_selection(&snapshot, None), Selection::Empty);
}

/// No request against a non-empty snapshot selects the first row.
#[test]
fn no_request_selects_first_row() {
    let snapshot = ids(&["a", "b"]);
    assert_eq!(resolve_selection(&snapshot, None), Selection::Resolved("a".into()));
}

/// Resolving twice against the same unchanged snapshot is a fixed point.
#[test]
fn resolution_is_idempotent() {
    let snapshot = ids(&["a", "b", "c"]);

    let first = resolve_selection(&snapshot, Some("q"));
    let second = resolve_selection(&snapshot, first.resolved_id());
    assert_eq!(first, second, "Re-resolving the resolved id must not move");
}

/// The four legal transitions, driven through apply_snapshot.
#[test]
fn state_machine_transitions() {
    // Empty -> Resolved(first) when a non-empty snapshot loads.
    let state = Selection::Empty;
    let state = state.apply_snapshot(&ids(&["a", "b"]));
    assert_eq!(state, Selection::Resolved("a".into()));

    // Resolved(x) -> Resolved(x) when x remains valid.
    let state = Selection::Resolved("b".into());
    let state = state.apply_snapshot(&ids(&["a", "b"]));
    assert_eq!(state, Selection::Resolved("b".into()));

    // Resolved(x) -> Resolved(first) when x is no longer present.
    let state = Selection::Resolved("x".into());
    let state = state.apply_snapshot(&ids(&["a", "b"]));
    assert_eq!(state, Selection::Resolved("a".into()));

    // Resolved(x) -> Empty when the snapshot becomes empty.
    let state = Selection::Resolved("a".into());
    let state = state.apply_snapshot(&[]);
    assert_eq!(state, Selection::Empty);
}

/// Accessors agree with the state.
#[test]
fn accessors_reflect_state() {
    let resolved = Selection::Resolved("a".into());
    assert_eq!(resolved.resolved_id(), Some("a"));
    assert!(!resolved.is_empty());

    assert_eq!(Selection::Empty.resolved_id(), None);
    assert!(Selection::Empty.is_empty());
}
