use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PeriodType, Region};
use crate::values::Count;

/// Observations supplied with one estimation request
///
/// Immutable once built: the estimator only borrows it and echoes a copy
/// back as the `data` field of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationInput {
    pub region: Region,
    /// Unit of `time_to_elapse`
    pub period_type: PeriodType,
    /// Elapsed time to project over, in units of `period_type`
    #[serde(with = "rust_decimal::serde::float")]
    pub time_to_elapse: Decimal,
    /// Confirmed cases observed so far
    pub reported_cases: Count,
    /// Total population of the region
    pub population: Count,
    /// Total hospital bed capacity of the region
    pub total_hospital_beds: Count,
}

impl EstimationInput {
    /// Create an input projecting `time_to_elapse` units of `period_type`
    pub fn new(
        region: Region,
        period_type: PeriodType,
        time_to_elapse: Decimal,
        reported_cases: Count,
    ) -> Self {
        Self {
            region,
            period_type,
            time_to_elapse,
            reported_cases,
            population: 0,
            total_hospital_beds: 0,
        }
    }

    pub fn with_population(mut self, population: Count) -> Self {
        self.population = population;
        self
    }

    pub fn with_hospital_beds(mut self, total_hospital_beds: Count) -> Self {
        self.total_hospital_beds = total_hospital_beds;
        self
    }

    pub fn with_reported_cases(mut self, reported_cases: Count) -> Self {
        self.reported_cases = reported_cases;
        self
    }

    pub fn with_period(mut self, period_type: PeriodType, time_to_elapse: Decimal) -> Self {
        self.period_type = period_type;
        self.time_to_elapse = time_to_elapse;
        self
    }
}
