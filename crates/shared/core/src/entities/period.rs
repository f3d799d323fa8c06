use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of the elapsed-time field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Days,
    Weeks,
    Months,
    /// Any period string outside the known set
    #[serde(other)]
    Unrecognized,
}

impl PeriodType {
    /// Number of days in one unit of this period, `None` if unrecognized
    pub fn days_per_unit(&self) -> Option<u32> {
        match self {
            PeriodType::Days => Some(1),
            PeriodType::Weeks => Some(7),
            PeriodType::Months => Some(30),
            PeriodType::Unrecognized => None,
        }
    }

    /// Returns true for days, weeks and months
    pub fn is_recognized(&self) -> bool {
        !matches!(self, PeriodType::Unrecognized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Days => "days",
            PeriodType::Weeks => "weeks",
            PeriodType::Months => "months",
            PeriodType::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
