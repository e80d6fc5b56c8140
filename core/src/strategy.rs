//! Next-best-action recommendation attached to every evaluation.
//!
//! Deterministic banding over (base risk, tier, tenure). The presentation
//! layer renders the call read-only; nothing here feeds back into scoring.

use serde::{Deserialize, Serialize};

/// Risk above this gets a retention play; at or below, a growth play.
pub const RETENTION_RISK_THRESHOLD: f64 = 50.0;

/// Tenure beyond this marks an account as an established advocate.
pub const ADVOCATE_TENURE_MONTHS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyPriority {
    RetentionPlay,
    GrowthPlay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCall {
    pub priority: StrategyPriority,
    pub headline: String,
    pub action: String,
}

/// Pick the next-best-action call for one scored customer.
pub fn recommend(base_risk: f64, tier_is_high_risk: bool, tenure_months: u32) -> StrategyCall {
    if base_risk > RETENTION_RISK_THRESHOLD {
        let action = if tier_is_high_risk {
            "Volatile account. Offer a 15% loyalty discount tied to a move onto an annual contract."
        } else {
            "Unusual risk for a committed tier. Schedule a proactive success call to surface friction."
        };
        StrategyCall {
            priority: StrategyPriority::RetentionPlay,
            headline: "High-Priority Retention".into(),
            action: action.into(),
        }
    } else {
        let action = if tenure_months > ADVOCATE_TENURE_MONTHS {
            "Loyal advocate. Enroll in the referral program and unlock early-access features."
        } else {
            "Stable account. Cross-sell the security bundle to grow lifetime value."
        };
        StrategyCall {
            priority: StrategyPriority::GrowthPlay,
            headline: "Growth Opportunity".into(),
            action: action.into(),
        }
    }
}
