//! Time Normalization
//!
//! Converts the elapsed period of a request into days and into the number of
//! whole doubling intervals used as the growth exponent.

use outbreak_core::PeriodType;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Default doubling interval of the growth model
pub const DOUBLING_INTERVAL_DAYS: u32 = 3;

/// Elapsed time expressed in days
///
/// Unrecognized periods yield zero days rather than an error.
pub fn days_elapsed(period_type: PeriodType, time_to_elapse: Decimal) -> Decimal {
    match period_type.days_per_unit() {
        Some(days) => time_to_elapse.saturating_mul(Decimal::from(days)),
        None => Decimal::ZERO,
    }
}

/// Number of whole doubling intervals in `days`
///
/// Partial intervals contribute no doubling. Saturates at `u32::MAX` so an
/// absurd horizon surfaces as an overflow in the growth stage.
pub fn doubling_intervals(days: Decimal, interval_days: u32) -> u32 {
    if interval_days == 0 || days <= Decimal::ZERO {
        return 0;
    }
    (days / Decimal::from(interval_days))
        .floor()
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Number of 3-day doubling intervals elapsed
///
/// Uses the default model only; an estimator configured with another
/// `doubling_interval_days` derives its growth factor through [`Timeline`].
pub fn growth_factor(period_type: PeriodType, time_to_elapse: Decimal) -> u32 {
    doubling_intervals(
        days_elapsed(period_type, time_to_elapse),
        DOUBLING_INTERVAL_DAYS,
    )
}

/// Elapsed period of one request, computed once and shared by both scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub days: Decimal,
    pub growth_factor: u32,
}

impl Timeline {
    pub fn new(period_type: PeriodType, time_to_elapse: Decimal, interval_days: u32) -> Self {
        let days = days_elapsed(period_type, time_to_elapse);
        Self {
            days,
            growth_factor: doubling_intervals(days, interval_days),
        }
    }

    pub fn is_zero_days(&self) -> bool {
        self.days.is_zero()
    }
}
