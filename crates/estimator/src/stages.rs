//! Scenario Derivation Stages
//!
//! One pure function per metric. Each takes the already-truncated outputs of
//! earlier stages as plain values and returns `None` on arithmetic overflow.
//!
//! ```text
//! reported cases ──► currently infected ──► infections by requested time
//!                                                   │
//!                 ┌──────────────┬──────────────┬───┴──────────┬──────────────┐
//!                 ▼              ▼              ▼              ▼              ▼
//!          severe cases      ICU cases   ventilator cases  dollars in flight
//!                 │
//!                 ▼
//!          hospital beds
//! ```

use outbreak_core::{BedBalance, Count, Dollars, Rate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of the derivation chain, named after the metric it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    CurrentlyInfected,
    InfectionsByRequestedTime,
    SevereCases,
    HospitalBeds,
    IcuCases,
    VentilatorCases,
    DollarsInFlight,
}

impl Stage {
    pub fn field_name(&self) -> &'static str {
        match self {
            Stage::CurrentlyInfected => "currentlyInfected",
            Stage::InfectionsByRequestedTime => "infectionsByRequestedTime",
            Stage::SevereCases => "severeCasesByRequestedTime",
            Stage::HospitalBeds => "hospitalBedsByRequestedTime",
            Stage::IcuCases => "casesForICUByRequestedTime",
            Stage::VentilatorCases => "casesForVentilatorsByRequestedTime",
            Stage::DollarsInFlight => "dollarsInFlight",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// `floor(count × numerator / denominator)` without forming the full product
///
/// Splits `count` into whole multiples of `denominator` and a remainder so
/// counts beyond the `Decimal` range still truncate exactly.
fn mul_div_floor(count: Count, numerator: u128, denominator: u128) -> Option<Count> {
    if denominator == 0 {
        return None;
    }
    let whole = (count / denominator).checked_mul(numerator)?;
    let part = (count % denominator).checked_mul(numerator)? / denominator;
    whole.checked_add(part)
}

/// Non-negative decimal as `(mantissa, 10^scale)`
fn ratio(value: Decimal) -> Option<(u128, u128)> {
    let value = value.normalize();
    let mantissa = u128::try_from(value.mantissa()).ok()?;
    Some((mantissa, 10u128.checked_pow(value.scale())?))
}

/// `floor(count × rate)`, truncated toward zero
pub fn apply_rate(count: Count, rate: Rate) -> Option<Count> {
    let (numerator, denominator) = ratio(rate)?;
    mul_div_floor(count, numerator, denominator)
}

/// `reported × multiplier`
pub fn currently_infected(reported_cases: Count, case_multiplier: u64) -> Option<Count> {
    reported_cases.checked_mul(Count::from(case_multiplier))
}

/// `currently_infected × 2^growth_factor`
pub fn infections_by_requested_time(
    currently_infected: Count,
    growth_factor: u32,
) -> Option<Count> {
    if currently_infected == 0 {
        return Some(0);
    }
    let two: Count = 2;
    two.checked_pow(growth_factor)?.checked_mul(currently_infected)
}

/// Projected infections requiring hospitalization
pub fn severe_cases(infections: Count, severe_case_rate: Rate) -> Option<Count> {
    apply_rate(infections, severe_case_rate)
}

/// `floor(total_beds × availability) − severe_cases`; negative is a deficit
pub fn hospital_beds(
    total_hospital_beds: Count,
    bed_availability_rate: Rate,
    severe_cases: Count,
) -> Option<BedBalance> {
    let available = apply_rate(total_hospital_beds, bed_availability_rate)?;
    let available = BedBalance::try_from(available).ok()?;
    let demand = BedBalance::try_from(severe_cases).ok()?;
    available.checked_sub(demand)
}

pub fn icu_cases(infections: Count, icu_rate: Rate) -> Option<Count> {
    apply_rate(infections, icu_rate)
}

pub fn ventilator_cases(infections: Count, ventilator_rate: Rate) -> Option<Count> {
    apply_rate(infections, ventilator_rate)
}

/// `floor(infections × daily_income_per_capita / days)`
///
/// Returns `None` on overflow and when `days` is zero; callers apply the
/// zero-day policy before reaching this stage.
pub fn dollars_in_flight(
    infections: Count,
    daily_income_per_capita: Decimal,
    days: Decimal,
) -> Option<Dollars> {
    let (income, income_scale) = ratio(daily_income_per_capita)?;
    let (days, days_scale) = ratio(days)?;
    mul_div_floor(
        infections,
        income.checked_mul(days_scale)?,
        days.checked_mul(income_scale)?,
    )
}
