//! Roster generation — the dataset provider.
//!
//! Builds an ordered, immutable snapshot of customer profiles for one
//! cohort, deterministically from a master seed. Stable ordering and
//! stable ids within one snapshot; same (cohort, seed) = same roster.

use crate::{
    config::{CohortConfig, HubConfig},
    error::HubResult,
    name_generator::NameGenerator,
    rng::{RngBank, StreamRng, StreamSlot},
    scoring::{RiskInputs, Scorer},
    types::{CohortId, CustomerId},
};
use serde::{Deserialize, Serialize};

pub const TENURE_MIN_MONTHS: u32 = 1;
pub const TENURE_MAX_MONTHS: u32 = 72;

/// One customer record under evaluation. Immutable once generated;
/// the engine derives new scalars from it and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub customer_id: CustomerId,
    pub display_name: String,
    pub tenure_months: u32,
    pub plan_tier: String,
    pub tier_is_high_risk: bool,
    pub monthly_value: f64,
    pub has_priority_support: bool,
    /// Display-only percentage string attached at generation time.
    /// The scoring engine never reads it.
    pub risk_display: String,
}

impl CustomerProfile {
    pub fn risk_inputs(&self) -> RiskInputs {
        RiskInputs {
            tenure_months: self.tenure_months,
            tier_is_high_risk: self.tier_is_high_risk,
            has_priority_support: self.has_priority_support,
        }
    }
}

/// An ordered dataset snapshot for one cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub cohort_id: CohortId,
    pub seed: u64,
    customers: Vec<CustomerProfile>,
}

impl RosterSnapshot {
    /// The snapshot a fresh session starts from, before any cohort loads.
    pub fn empty() -> Self {
        Self {
            cohort_id: String::new(),
            seed: 0,
            customers: Vec::new(),
        }
    }

    pub fn customers(&self) -> &[CustomerProfile] {
        &self.customers
    }

    /// Ids in snapshot order.
    pub fn customer_ids(&self) -> Vec<CustomerId> {
        self.customers.iter().map(|c| c.customer_id.clone()).collect()
    }

    pub fn get(&self, customer_id: &str) -> Option<&CustomerProfile> {
        self.customers.iter().find(|c| c.customer_id == customer_id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

pub struct RosterGenerator {
    config: HubConfig,
}

impl RosterGenerator {
    pub fn new(config: HubConfig) -> Self {
        Self { config }
    }

    /// Generate the roster snapshot for one cohort.
    pub fn generate(&self, cohort_id: &str, master_seed: u64) -> HubResult<RosterSnapshot> {
        let cohort = self.config.cohort(cohort_id)?;
        let scorer = Scorer::new(self.config.clone());

        let bank = RngBank::new(master_seed);
        let mut attrs = bank.for_stream(StreamSlot::Attributes);
        let mut names = bank.for_stream(StreamSlot::Names);

        let mut customers = Vec::with_capacity(cohort.roster_size);
        for i in 0..cohort.roster_size {
            customers.push(self.generate_profile(cohort, &scorer, i, &mut attrs, &mut names)?);
        }

        log::info!(
            "roster: generated {} profiles for cohort '{}' (seed {})",
            customers.len(),
            cohort_id,
            master_seed
        );

        Ok(RosterSnapshot {
            cohort_id: cohort_id.to_string(),
            seed: master_seed,
            customers,
        })
    }

    fn generate_profile(
        &self,
        cohort: &CohortConfig,
        scorer: &Scorer,
        index: usize,
        attrs: &mut StreamRng,
        names: &mut StreamRng,
    ) -> HubResult<CustomerProfile> {
        // Cohort-prefixed ids: a stale selection from another cohort can
        // never alias a row of this one.
        let customer_id = format!("{}-{:04}", cohort.id, index);

        let display_name = if cohort.company_accounts {
            NameGenerator::company_name(names)
        } else {
            NameGenerator::account_holder_name(names)
        };

        let tenure_span = (TENURE_MAX_MONTHS - TENURE_MIN_MONTHS + 1) as u64;
        let tenure_months = TENURE_MIN_MONTHS + attrs.next_u64_below(tenure_span) as u32;

        let tier_index = attrs.next_u64_below(cohort.tier_labels.len() as u64) as usize;
        let plan_tier = cohort.tier_labels[tier_index].clone();
        let tier_is_high_risk = tier_index == 0;

        let raw_value = attrs.uniform_f64(cohort.monthly_value_min, cohort.monthly_value_max);
        let monthly_value = (raw_value * 100.0).round() / 100.0;

        let has_priority_support = attrs.chance(cohort.priority_support_rate);

        let score = scorer.base_risk(
            self.config.scoring.default_variant,
            &RiskInputs {
                tenure_months,
                tier_is_high_risk,
                has_priority_support,
            },
        )?;
        let risk_display = format!("{:.1}%", score.risk);

        Ok(CustomerProfile {
            customer_id,
            display_name,
            tenure_months,
            plan_tier,
            tier_is_high_risk,
            monthly_value,
            has_priority_support,
            risk_display,
        })
    }
}
