use serde::{Deserialize, Serialize};

use crate::values::{BedBalance, Count, Dollars};

/// Derived metrics for one scenario
///
/// Every field is a whole number, truncated toward zero at the stage that
/// produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetrics {
    /// Estimated true infections at observation time
    pub currently_infected: Count,
    /// Projected infections after the elapsed period
    pub infections_by_requested_time: Count,
    /// Projected infections requiring hospitalization
    pub severe_cases_by_requested_time: Count,
    /// Available beds minus severe cases (negative = deficit)
    pub hospital_beds_by_requested_time: BedBalance,
    /// Projected infections requiring ICU care
    #[serde(rename = "casesForICUByRequestedTime")]
    pub cases_for_icu_by_requested_time: Count,
    /// Projected infections requiring ventilation
    pub cases_for_ventilators_by_requested_time: Count,
    /// Economic value at risk per elapsed day
    pub dollars_in_flight: Dollars,
}

impl ScenarioMetrics {
    /// Does projected demand exceed available beds?
    pub fn has_bed_shortfall(&self) -> bool {
        self.hospital_beds_by_requested_time < 0
    }

    /// Number of missing beds (0 when in surplus)
    pub fn bed_shortfall(&self) -> Count {
        if self.has_bed_shortfall() {
            self.hospital_beds_by_requested_time.unsigned_abs()
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_shortfall() {
        let deficit = ScenarioMetrics {
            hospital_beds_by_requested_time: -15353,
            ..Default::default()
        };
        assert!(deficit.has_bed_shortfall());
        assert_eq!(deficit.bed_shortfall(), 15353);

        let surplus = ScenarioMetrics {
            hospital_beds_by_requested_time: 12,
            ..Default::default()
        };
        assert!(!surplus.has_bed_shortfall());
        assert_eq!(surplus.bed_shortfall(), 0);
    }

    #[test]
    fn test_wire_names() {
        let value = serde_json::to_value(ScenarioMetrics::default()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "currentlyInfected",
            "infectionsByRequestedTime",
            "severeCasesByRequestedTime",
            "hospitalBedsByRequestedTime",
            "casesForICUByRequestedTime",
            "casesForVentilatorsByRequestedTime",
            "dollarsInFlight",
        ] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(object.len(), 7);
    }
}
