//! Estimator Configuration
//!
//! The fixed multipliers and rates of the impact model, plus the policies
//! for the two degenerate inputs (zero elapsed days, unrecognized period).
//! Built once and handed to the estimator; never mutated afterwards.

use outbreak_core::{Rate, Scenario};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};

/// Scenario constants of the impact model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactRates {
    /// Reported cases → currently infected, baseline scenario
    pub baseline_case_multiplier: u64,
    /// Reported cases → currently infected, severe scenario
    pub severe_case_multiplier: u64,
    /// Share of projected infections requiring hospitalization
    pub severe_case_rate: Rate,
    /// Share of total beds available for outbreak patients
    pub bed_availability_rate: Rate,
    /// Share of projected infections requiring ICU care
    pub icu_rate: Rate,
    /// Share of projected infections requiring ventilation
    pub ventilator_rate: Rate,
    /// Days for infections to double
    pub doubling_interval_days: u32,
}

impl Default for ImpactRates {
    fn default() -> Self {
        Self {
            baseline_case_multiplier: 10,
            severe_case_multiplier: 50,
            severe_case_rate: dec!(0.15),
            bed_availability_rate: dec!(0.35),
            icu_rate: dec!(0.05),
            ventilator_rate: dec!(0.02),
            doubling_interval_days: 3,
        }
    }
}

impl ImpactRates {
    /// Multiplier from reported cases to currently infected
    pub fn case_multiplier(&self, scenario: Scenario) -> u64 {
        match scenario {
            Scenario::Baseline => self.baseline_case_multiplier,
            Scenario::Severe => self.severe_case_multiplier,
        }
    }

    /// Check multipliers are positive and rates are fractions
    pub fn validate(&self) -> Result<()> {
        if self.baseline_case_multiplier == 0 || self.severe_case_multiplier == 0 {
            return Err(EstimateError::InvalidRates(
                "case multipliers must be positive".to_string(),
            ));
        }

        if self.doubling_interval_days == 0 {
            return Err(EstimateError::InvalidRates(
                "doubling interval must be at least one day".to_string(),
            ));
        }

        let fractions = [
            ("severe_case_rate", self.severe_case_rate),
            ("bed_availability_rate", self.bed_availability_rate),
            ("icu_rate", self.icu_rate),
            ("ventilator_rate", self.ventilator_rate),
        ];
        for (name, rate) in fractions {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EstimateError::InvalidRates(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        Ok(())
    }
}

/// What to report for dollars in flight when the elapsed period is zero days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDayPolicy {
    /// No elapsed time, no exposure: report 0
    #[default]
    Zero,
    /// Fail the estimation with `DivisionByZero`
    Reject,
}

/// Full estimator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub rates: ImpactRates,
    pub zero_day_policy: ZeroDayPolicy,
    /// Reject unrecognized period types instead of treating them as zero days
    pub strict_period_type: bool,
}
