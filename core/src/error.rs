use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Invalid tenure: {actual} months (must be at least 1)")]
    InvalidTenure { actual: u32 },

    #[error("Invalid monthly value: {actual} (must be positive)")]
    InvalidMonthlyValue { actual: f64 },

    #[error("Invalid discount: {actual}% (must be within [0, 100])")]
    InvalidDiscount { actual: f64 },

    #[error("Unknown cohort '{id}'")]
    UnknownCohort { id: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type HubResult<T> = Result<T, HubError>;
