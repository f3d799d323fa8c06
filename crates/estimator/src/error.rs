//! Estimator errors

use outbreak_core::Scenario;
use thiserror::Error;

use crate::stages::Stage;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Invalid rates: {0}")]
    InvalidRates(String),

    #[error("Division by zero computing dollarsInFlight for {scenario}: elapsed period is zero days")]
    DivisionByZero { scenario: Scenario },

    #[error("Arithmetic overflow computing {stage} for {scenario}")]
    Overflow { stage: Stage, scenario: Scenario },
}

impl EstimateError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        EstimateError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;
