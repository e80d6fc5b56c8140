//! Evaluation session — the single-writer state holder the hosting layer
//! drives.
//!
//! One session owns one roster snapshot, one selection, and one active
//! discount. Operations are strictly sequential; concurrent sessions get
//! their own `EvaluationSession` value and share nothing. Every snapshot
//! swap re-resolves the selection before any scoring can happen.

use crate::{
    config::{FormulaVariant, HubConfig},
    error::HubResult,
    roster::{RosterGenerator, RosterSnapshot},
    scoring::{self, RevenueImpact, RiskScore, Scorer},
    selection::{resolve_selection, Selection},
    strategy::{self, StrategyCall},
    types::CustomerId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full output of one evaluation request. Recomputed every time;
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub customer_id: CustomerId,
    pub variant: FormulaVariant,
    pub discount_pct: f64,
    pub score: RiskScore,
    pub simulated_risk: f64,
    pub revenue: RevenueImpact,
    pub strategy: StrategyCall,
    pub evaluated_at: DateTime<Utc>,
}

pub struct EvaluationSession {
    session_id: String,
    scorer: Scorer,
    generator: RosterGenerator,
    variant: FormulaVariant,
    snapshot: RosterSnapshot,
    selection: Selection,
    discount_pct: f64,
}

impl EvaluationSession {
    pub fn new(config: HubConfig) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            variant: config.scoring.default_variant,
            scorer: Scorer::new(config.clone()),
            generator: RosterGenerator::new(config),
            snapshot: RosterSnapshot::empty(),
            selection: Selection::Empty,
            discount_pct: 0.0,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn snapshot(&self) -> &RosterSnapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn discount_pct(&self) -> f64 {
        self.discount_pct
    }

    pub fn variant(&self) -> FormulaVariant {
        self.variant
    }

    pub fn set_variant(&mut self, variant: FormulaVariant) {
        self.variant = variant;
    }

    /// Generate and load the roster for a cohort, swapping out the current
    /// snapshot. The selection is re-resolved against the new snapshot
    /// before the swap is considered complete.
    pub fn load_cohort(&mut self, cohort_id: &str, seed: u64) -> HubResult<()> {
        let snapshot = self.generator.generate(cohort_id, seed)?;

        let previous = self.selection.clone();
        self.selection = previous.apply_snapshot(&snapshot.customer_ids());

        if self.selection != previous {
            log::debug!(
                "session {}: selection moved from {:?} to {:?} on cohort swap",
                self.session_id,
                previous,
                self.selection
            );
        }

        self.snapshot = snapshot;
        Ok(())
    }

    /// Request a row selection. A stale or unknown id falls back to the
    /// first row of the current snapshot, per the resolution contract.
    pub fn select(&mut self, customer_id: &str) {
        self.selection = resolve_selection(&self.snapshot.customer_ids(), Some(customer_id));
    }

    /// Set the active discount offer. Most recent value wins; the previous
    /// offer is replaced, not accumulated. Rejects values outside [0, 100]
    /// and leaves the prior offer active.
    pub fn set_discount(&mut self, discount_pct: f64) -> HubResult<()> {
        scoring::validate_discount(discount_pct)?;
        self.discount_pct = discount_pct;
        Ok(())
    }

    /// Score the currently selected customer under the active discount.
    /// Returns `Ok(None)` when the selection is `Empty`: no evaluation
    /// is possible, and that is a state, not an error.
    pub fn evaluate(&self) -> HubResult<Option<Evaluation>> {
        let Some(id) = self.selection.resolved_id() else {
            return Ok(None);
        };
        let Some(profile) = self.snapshot.get(id) else {
            return Ok(None);
        };

        let score = self.scorer.base_risk(self.variant, &profile.risk_inputs())?;
        let simulated_risk = self.scorer.simulate_discount(score.risk, self.discount_pct)?;
        let revenue = self.scorer.revenue_impact(
            profile.monthly_value,
            score.risk,
            simulated_risk,
            self.discount_pct,
        )?;
        let strategy = strategy::recommend(score.risk, profile.tier_is_high_risk, profile.tenure_months);

        Ok(Some(Evaluation {
            customer_id: profile.customer_id.clone(),
            variant: self.variant,
            discount_pct: self.discount_pct,
            score,
            simulated_risk,
            revenue,
            strategy,
            evaluated_at: Utc::now(),
        }))
    }
}
