//! Evaluation-session tests: selection consistency across cohort swaps
//! (the load-bearing invariant), discount replacement semantics, and
//! evaluation against an empty cohort.

use retention_core::config::{FormulaVariant, HubConfig};
use retention_core::error::HubError;
use retention_core::scoring::Scorer;
use retention_core::selection::Selection;
use retention_core::session::EvaluationSession;

fn session() -> EvaluationSession {
    EvaluationSession::new(HubConfig::default_test())
}

/// A fresh session starts Empty; loading a non-empty cohort selects the
/// first row.
#[test]
fn loading_cohort_selects_first_row() {
    let mut session = session();
    assert!(session.selection().is_empty());

    session.load_cohort("telecom", 42).unwrap();
    assert_eq!(
        *session.selection(),
        Selection::Resolved("telecom-0000".into())
    );
}

/// Reloading the same cohort keeps a still-valid selection in place.
#[test]
fn reload_keeps_valid_selection() {
    let mut session = session();
    session.load_cohort("telecom", 42).unwrap();
    session.select("telecom-0005");

    session.load_cohort("telecom", 42).unwrap();
    assert_eq!(
        *session.selection(),
        Selection::Resolved("telecom-0005".into())
    );
}

/// Swapping cohorts invalidates the old selection and resets to the new
/// snapshot's first row before any scoring can happen.
#[test]
fn cohort_swap_resets_stale_selection() {
    let mut session = session();
    session.load_cohort("telecom", 42).unwrap();
    session.select("telecom-0005");

    session.load_cohort("saas", 42).unwrap();
    assert_eq!(
        *session.selection(),
        Selection::Resolved("saas-0000".into())
    );
}

/// An empty cohort resolves to Empty and evaluation reports "nothing to
/// evaluate" rather than failing.
#[test]
fn empty_cohort_yields_no_evaluation() {
    let mut session = session();
    session.load_cohort("pilot", 42).unwrap();

    assert!(session.selection().is_empty());
    assert!(session.evaluate().unwrap().is_none());
}

/// Leaving an empty cohort for a populated one transitions Empty ->
/// Resolved(first).
#[test]
fn empty_to_populated_selects_first_row() {
    let mut session = session();
    session.load_cohort("pilot", 42).unwrap();
    session.load_cohort("telecom", 7).unwrap();

    assert_eq!(
        *session.selection(),
        Selection::Resolved("telecom-0000".into())
    );
}

/// Selecting an unknown id falls back to the first row instead of
/// sticking or failing.
#[test]
fn unknown_selection_falls_back_to_first_row() {
    let mut session = session();
    session.load_cohort("telecom", 42).unwrap();

    session.select("ghost-9999");
    assert_eq!(
        *session.selection(),
        Selection::Resolved("telecom-0000".into())
    );
}

/// The most recently set discount wins; earlier offers are replaced, not
/// accumulated.
#[test]
fn latest_discount_replaces_previous() {
    let mut session = session();
    session.load_cohort("telecom", 42).unwrap();

    session.set_discount(10.0).unwrap();
    session.set_discount(50.0).unwrap();
    assert!((session.discount_pct() - 50.0).abs() < 1e-9);

    let eval = session.evaluate().unwrap().unwrap();
    assert!((eval.discount_pct - 50.0).abs() < 1e-9);
}

/// A rejected discount leaves the prior offer active.
#[test]
fn rejected_discount_keeps_prior_offer() {
    let mut session = session();
    session.set_discount(25.0).unwrap();

    let err = session.set_discount(120.0).unwrap_err();
    assert!(matches!(err, HubError::InvalidDiscount { .. }));
    assert!((session.discount_pct() - 25.0).abs() < 1e-9);
}

/// An evaluation matches what the scorer produces directly for the same
/// profile and discount.
#[test]
fn evaluation_matches_direct_scoring() {
    let config = HubConfig::default_test();
    let mut session = EvaluationSession::new(config.clone());
    session.load_cohort("telecom", 42).unwrap();
    session.select("telecom-0003");
    session.set_discount(25.0).unwrap();

    let eval = session.evaluate().unwrap().unwrap();

    let scorer = Scorer::new(config);
    let profile = session.snapshot().get("telecom-0003").unwrap();
    let score = scorer
        .base_risk(FormulaVariant::Contract, &profile.risk_inputs())
        .unwrap();
    let simulated = scorer.simulate_discount(score.risk, 25.0).unwrap();
    let impact = scorer
        .revenue_impact(profile.monthly_value, score.risk, simulated, 25.0)
        .unwrap();

    assert!((eval.score.risk - score.risk).abs() < 1e-9);
    assert!((eval.simulated_risk - simulated).abs() < 1e-9);
    assert!(
        (eval.revenue.revenue_safeguarded - impact.revenue_safeguarded).abs() < 1e-9,
        "Session and direct scoring disagree on safeguarded revenue"
    );
}

/// Switching the formula variant changes the evaluation without touching
/// the roster or selection.
#[test]
fn variant_switch_rescores_same_selection() {
    let mut session = session();
    session.load_cohort("telecom", 42).unwrap();

    let contract_eval = session.evaluate().unwrap().unwrap();
    session.set_variant(FormulaVariant::Plan);
    let plan_eval = session.evaluate().unwrap().unwrap();

    assert_eq!(contract_eval.customer_id, plan_eval.customer_id);
    assert_eq!(plan_eval.variant, FormulaVariant::Plan);
}

/// Sessions are isolated: distinct identities, independent state.
#[test]
fn sessions_are_isolated() {
    let mut a = session();
    let b = session();
    assert_ne!(a.session_id(), b.session_id());

    a.load_cohort("telecom", 42).unwrap();
    a.set_discount(50.0).unwrap();
    assert!(b.selection().is_empty());
    assert!((b.discount_pct() - 0.0).abs() < 1e-9);
}
