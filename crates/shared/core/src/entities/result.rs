use serde::{Deserialize, Serialize};

use super::{EstimationInput, Scenario, ScenarioMetrics};

/// The input paired with both scenario projections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    /// The input this result was computed from
    pub data: EstimationInput,
    /// Baseline scenario
    pub impact: ScenarioMetrics,
    /// Severe scenario
    pub severe_impact: ScenarioMetrics,
}

impl EstimationResult {
    pub fn new(
        data: EstimationInput,
        impact: ScenarioMetrics,
        severe_impact: ScenarioMetrics,
    ) -> Self {
        Self {
            data,
            impact,
            severe_impact,
        }
    }

    /// Metrics for the given scenario
    pub fn scenario(&self, scenario: Scenario) -> &ScenarioMetrics {
        match scenario {
            Scenario::Baseline => &self.impact,
            Scenario::Severe => &self.severe_impact,
        }
    }
}
