//! Input validation at the estimator boundary
//!
//! Counts are unsigned in the domain model, so negativity only needs
//! checking for the decimal fields. Fields are named by their wire names.

use outbreak_core::EstimationInput;
use rust_decimal::Decimal;

use crate::error::{EstimateError, Result};

/// Validate an input before it enters the derivation chain
pub fn validate_input(input: &EstimationInput, strict_period_type: bool) -> Result<()> {
    if strict_period_type && !input.period_type.is_recognized() {
        return Err(EstimateError::validation(
            "periodType",
            "expected one of days, weeks, months",
        ));
    }

    if input.time_to_elapse < Decimal::ZERO {
        return Err(EstimateError::validation(
            "timeToElapse",
            format!("must be non-negative, got {}", input.time_to_elapse),
        ));
    }

    if input.population == 0 {
        return Err(EstimateError::validation("population", "must be positive"));
    }

    let region = &input.region;
    if region.avg_age < Decimal::ZERO {
        return Err(EstimateError::validation(
            "avgAge",
            format!("must be non-negative, got {}", region.avg_age),
        ));
    }

    if region.avg_daily_income_in_usd < Decimal::ZERO {
        return Err(EstimateError::validation(
            "avgDailyIncomeInUSD",
            format!("must be non-negative, got {}", region.avg_daily_income_in_usd),
        ));
    }

    let fraction = region.avg_daily_income_population;
    if fraction < Decimal::ZERO || fraction > Decimal::ONE {
        return Err(EstimateError::validation(
            "avgDailyIncomePopulation",
            format!("must be within [0, 1], got {}", fraction),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use outbreak_core::{PeriodType, Region};
    use rust_decimal_macros::dec;

    fn make_input() -> EstimationInput {
        EstimationInput::new(
            Region::new("Africa")
                .with_avg_age(dec!(19.7))
                .with_daily_income(dec!(1.5), dec!(0.65)),
            PeriodType::Days,
            dec!(30),
            10,
        )
        .with_population(1000)
        .with_hospital_beds(20)
    }

    fn invalid_field(input: &EstimationInput, strict: bool) -> Option<&'static str> {
        match validate_input(input, strict) {
            Err(EstimateError::Validation { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&make_input(), true).is_ok());
    }

    #[test]
    fn test_negative_time_rejected() {
        let input = make_input().with_period(PeriodType::Days, dec!(-1));
        assert_eq!(invalid_field(&input, false), Some("timeToElapse"));
    }

    #[test]
    fn test_zero_time_accepted() {
        let input = make_input().with_period(PeriodType::Days, Decimal::ZERO);
        assert!(validate_input(&input, false).is_ok());
    }

    #[test]
    fn test_zero_population_rejected() {
        let input = make_input().with_population(0);
        assert_eq!(invalid_field(&input, false), Some("population"));
    }

    #[test]
    fn test_income_fields() {
        let mut input = make_input();
        input.region.avg_daily_income_in_usd = dec!(-2);
        assert_eq!(invalid_field(&input, false), Some("avgDailyIncomeInUSD"));

        let mut input = make_input();
        input.region.avg_daily_income_population = dec!(1.2);
        assert_eq!(invalid_field(&input, false), Some("avgDailyIncomePopulation"));

        let mut input = make_input();
        input.region.avg_age = dec!(-0.5);
        assert_eq!(invalid_field(&input, false), Some("avgAge"));
    }

    #[test]
    fn test_unrecognized_period_only_rejected_when_strict() {
        let input = make_input().with_period(PeriodType::Unrecognized, dec!(3));
        assert!(validate_input(&input, false).is_ok());
        assert_eq!(invalid_field(&input, true), Some("periodType"));
    }
}
