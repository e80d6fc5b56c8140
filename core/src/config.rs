use crate::error::{HubError, HubResult};
use serde::{Deserialize, Serialize};

/// Which parameter set drives the base-risk formula.
///
/// Two numerically distinct parameterizations of the same linear heuristic
/// are in production use; both stay addressable behind one interface.
/// `Contract` is the shipped default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaVariant {
    Contract,
    Plan,
}

impl FormulaVariant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Plan => "plan",
        }
    }
}

/// Constants for one base-risk parameterization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaParams {
    pub high_risk_base: f64,
    pub low_risk_base: f64,
    pub support_penalty: f64,
    pub tenure_coefficient: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub default_variant: FormulaVariant,
    pub contract: FormulaParams,
    pub plan: FormulaParams,
    pub risk_floor: f64,
    pub risk_ceiling: f64,
}

impl ScoringConfig {
    pub fn params(&self, variant: FormulaVariant) -> &FormulaParams {
        match variant {
            FormulaVariant::Contract => &self.contract,
            FormulaVariant::Plan => &self.plan,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Offer tiers the presentation layer exposes. Informational only;
    /// the engine accepts any percentage in [0, 100].
    pub tiers: Vec<f64>,
    /// Risk points relieved per discount percentage point.
    /// 0.6 ships as the default; 0.8 is the alternate observed curve.
    pub relief_per_point: f64,
    /// Lifetime-value projection window in months.
    pub horizon_months: u32,
}

/// One entry of the cohort catalog. Tier labels are ordered; index 0 is
/// the high-risk tier for that cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortConfig {
    pub id: String,
    pub label: String,
    pub tier_labels: Vec<String>,
    pub monthly_value_min: f64,
    pub monthly_value_max: f64,
    pub roster_size: usize,
    pub priority_support_rate: f64,
    /// Company-style display names instead of personal names.
    #[serde(default)]
    pub company_accounts: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    pub scoring: ScoringConfig,
    pub discount: DiscountConfig,
    pub cohorts: Vec<CohortConfig>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScoringModelFile {
    default_variant: FormulaVariant,
    contract: FormulaParams,
    plan: FormulaParams,
    risk_floor: f64,
    risk_ceiling: f64,
    discount: DiscountConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct CohortCatalogFile {
    cohorts: Vec<CohortConfig>,
}

impl HubConfig {
    /// Load from the data/ directory.
    /// In tests, use HubConfig::default_test().
    pub fn load(data_dir: &str) -> HubResult<Self> {
        let model_path = format!("{data_dir}/scoring/scoring_model.json");
        let model_content = std::fs::read_to_string(&model_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {model_path}: {e}"))?;
        let model: ScoringModelFile = serde_json::from_str(&model_content)?;

        let catalog_path = format!("{data_dir}/cohorts/cohort_catalog.json");
        let catalog_content = std::fs::read_to_string(&catalog_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {catalog_path}: {e}"))?;
        let catalog: CohortCatalogFile = serde_json::from_str(&catalog_content)?;

        Ok(Self {
            scoring: ScoringConfig {
                default_variant: model.default_variant,
                contract: model.contract,
                plan: model.plan,
                risk_floor: model.risk_floor,
                risk_ceiling: model.risk_ceiling,
            },
            discount: model.discount,
            cohorts: catalog.cohorts,
        })
    }

    /// Config with hardcoded defaults for use in tests.
    pub fn default_test() -> Self {
        Self {
            scoring: ScoringConfig {
                default_variant: FormulaVariant::Contract,
                contract: FormulaParams {
                    high_risk_base: 45.0,
                    low_risk_base: 15.0,
                    support_penalty: 10.0,
                    tenure_coefficient: 0.4,
                },
                plan: FormulaParams {
                    high_risk_base: 35.0,
                    low_risk_base: 10.0,
                    support_penalty: 15.0,
                    tenure_coefficient: 0.3,
                },
                risk_floor: 5.0,
                risk_ceiling: 95.0,
            },
            discount: DiscountConfig {
                tiers: vec![0.0, 10.0, 25.0, 50.0],
                relief_per_point: 0.6,
                horizon_months: 24,
            },
            cohorts: vec![
                CohortConfig {
                    id: "telecom".into(),
                    label: "Telecom Subscribers".into(),
                    tier_labels: vec![
                        "Month-to-month".into(),
                        "One year".into(),
                        "Two year".into(),
                    ],
                    monthly_value_min: 18.0,
                    monthly_value_max: 120.0,
                    roster_size: 12,
                    priority_support_rate: 0.55,
                    company_accounts: false,
                },
                CohortConfig {
                    id: "saas".into(),
                    label: "SaaS Accounts".into(),
                    tier_labels: vec![
                        "Standard".into(),
                        "Premium".into(),
                        "Enterprise".into(),
                    ],
                    monthly_value_min: 18.0,
                    monthly_value_max: 500.0,
                    roster_size: 8,
                    priority_support_rate: 0.70,
                    company_accounts: true,
                },
                CohortConfig {
                    id: "pilot".into(),
                    label: "Pilot Program".into(),
                    tier_labels: vec![
                        "Trial".into(),
                        "Starter".into(),
                        "Growth".into(),
                    ],
                    monthly_value_min: 1.0,
                    monthly_value_max: 10_000.0,
                    roster_size: 0,
                    priority_support_rate: 0.50,
                    company_accounts: true,
                },
            ],
        }
    }

    pub fn cohort(&self, id: &str) -> HubResult<&CohortConfig> {
        self.cohorts
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| HubError::UnknownCohort { id: id.to_string() })
    }
}
