//! Risk & revenue scoring engine.
//!
//! Every operation here is a total, deterministic function of its explicit
//! inputs: no I/O, no randomness, no hidden state. Inputs are validated at
//! the boundary and rejected when out of domain; only the derived risk
//! percentage is ever clamped.

use crate::{
    config::{FormulaVariant, HubConfig},
    error::{HubError, HubResult},
};
use serde::{Deserialize, Serialize};

/// The customer attributes the base-risk formula consumes. Together with
/// the formula variant, these fully determine the base risk.
#[derive(Debug, Clone, Copy)]
pub struct RiskInputs {
    pub tenure_months: u32,
    pub tier_is_high_risk: bool,
    pub has_priority_support: bool,
}

/// A computed base-risk score with its component breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScore {
    /// Percentage, clamped to [risk_floor, risk_ceiling].
    pub risk: f64,
    // Components
    pub tier_base: f64,
    pub support_penalty: f64,
    pub tenure_credit: f64,
    /// The unclamped sum of the additive terms.
    pub raw_risk: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueImpact {
    pub lifetime_value: f64,
    pub baseline_revenue_at_risk: f64,
    pub simulated_revenue_at_risk: f64,
    pub revenue_safeguarded: f64,
}

/// Stateless scorer over a loaded configuration.
pub struct Scorer {
    config: HubConfig,
}

impl Scorer {
    pub fn new(config: HubConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Compute the base churn risk for one customer.
    ///
    /// `risk = tier_base + support_penalty - tenure * coefficient`,
    /// clamped once to [floor, ceiling] after all additive terms.
    /// The linear form is unbounded for extreme tenures, and risk is a
    /// probability-like percentage, so the bounds are applied to the sum,
    /// never per term.
    pub fn base_risk(&self, variant: FormulaVariant, inputs: &RiskInputs) -> HubResult<RiskScore> {
        if inputs.tenure_months < 1 {
            return Err(HubError::InvalidTenure {
                actual: inputs.tenure_months,
            });
        }

        let s = &self.config.scoring;
        let p = s.params(variant);

        let tier_base = if inputs.tier_is_high_risk {
            p.high_risk_base
        } else {
            p.low_risk_base
        };

        let support_penalty = if inputs.has_priority_support {
            0.0
        } else {
            p.support_penalty
        };

        let tenure_credit = inputs.tenure_months as f64 * p.tenure_coefficient;

        let raw_risk = tier_base + support_penalty - tenure_credit;
        let risk = raw_risk.clamp(s.risk_floor, s.risk_ceiling);

        Ok(RiskScore {
            risk,
            tier_base,
            support_penalty,
            tenure_credit,
            raw_risk,
        })
    }

    /// Simulate the risk after a retention discount is applied.
    ///
    /// `simulated = max(floor, base_risk - discount_pct * relief_per_point)`.
    /// Identity at discount 0; never exceeds base_risk for a non-negative
    /// discount; floored regardless of discount magnitude, since a customer
    /// is never modeled as risk-free.
    pub fn simulate_discount(&self, base_risk: f64, discount_pct: f64) -> HubResult<f64> {
        validate_discount(discount_pct)?;

        let relieved = base_risk - discount_pct * self.config.discount.relief_per_point;
        Ok(relieved.max(self.config.scoring.risk_floor))
    }

    /// Revenue-at-risk before and after the simulated discount, projected
    /// over the configured lifetime-value horizon.
    pub fn revenue_impact(
        &self,
        monthly_value: f64,
        base_risk: f64,
        simulated_risk: f64,
        discount_pct: f64,
    ) -> HubResult<RevenueImpact> {
        self.revenue_impact_over(
            monthly_value,
            base_risk,
            simulated_risk,
            discount_pct,
            self.config.discount.horizon_months,
        )
    }

    /// Same as [`Scorer::revenue_impact`] with an explicit horizon.
    ///
    /// `discount_pct > 100` would drive the discounted monthly value
    /// negative and break the safeguarded-revenue guarantee, so it is
    /// rejected rather than computed.
    pub fn revenue_impact_over(
        &self,
        monthly_value: f64,
        base_risk: f64,
        simulated_risk: f64,
        discount_pct: f64,
        horizon_months: u32,
    ) -> HubResult<RevenueImpact> {
        if monthly_value <= 0.0 {
            return Err(HubError::InvalidMonthlyValue {
                actual: monthly_value,
            });
        }
        validate_discount(discount_pct)?;

        let lifetime_value = monthly_value * horizon_months as f64;
        let baseline_revenue_at_risk = (base_risk / 100.0) * lifetime_value;

        let discounted_monthly_value = monthly_value * (1.0 - discount_pct / 100.0);
        let discounted_lifetime_value = discounted_monthly_value * horizon_months as f64;
        let simulated_revenue_at_risk = (simulated_risk / 100.0) * discounted_lifetime_value;

        Ok(RevenueImpact {
            lifetime_value,
            baseline_revenue_at_risk,
            simulated_revenue_at_risk,
            revenue_safeguarded: baseline_revenue_at_risk - simulated_revenue_at_risk,
        })
    }
}

/// Boundary check shared by every discount-consuming operation.
pub fn validate_discount(discount_pct: f64) -> HubResult<()> {
    if !(0.0..=100.0).contains(&discount_pct) {
        return Err(HubError::InvalidDiscount {
            actual: discount_pct,
        });
    }
    Ok(())
}
