use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two parallel projections
///
/// Scenarios differ only in the multiplier applied to reported cases;
/// each is derived independently from the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Best-estimate projection
    Baseline,
    /// Pessimistic projection
    Severe,
}

impl Scenario {
    /// Both scenarios, in output order
    pub const ALL: [Scenario; 2] = [Scenario::Baseline, Scenario::Severe];

    /// Field name of this scenario in the serialized result
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Baseline => "impact",
            Scenario::Severe => "severeImpact",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
