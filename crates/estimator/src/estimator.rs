//! Impact Estimation
//!
//! Runs the derivation chain once per scenario and pairs both projections
//! with the input.
//!
//! # Flow
//!
//! ```text
//! EstimationInput ─► validate ─► Timeline (days, growth factor)
//!                                   │
//!                     ┌─────────────┴─────────────┐
//!                     ▼                           ▼
//!             project(Baseline)            project(Severe)
//!                     │                           │
//!                     └──────────► EstimationResult ◄┘
//! ```
//!
//! Scenarios never read each other's values; both start from `reportedCases`.

use outbreak_core::{EstimationInput, EstimationResult, Scenario, ScenarioMetrics};

use crate::error::{EstimateError, Result};
use crate::rates::{EstimatorConfig, ZeroDayPolicy};
use crate::stages::{self, Stage};
use crate::time::Timeline;
use crate::validation::validate_input;

/// Outbreak impact estimator
///
/// Holds only immutable configuration, so one instance can serve any number
/// of requests, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ImpactEstimator {
    config: EstimatorConfig,
}

impl ImpactEstimator {
    /// Create an estimator, rejecting invalid rates
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.rates.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate both scenarios for an input
    pub fn estimate(&self, input: &EstimationInput) -> Result<EstimationResult> {
        validate_input(input, self.config.strict_period_type)?;
        let timeline = self.timeline(input);

        let impact = self.project_on(input, &timeline, Scenario::Baseline)?;
        let severe_impact = self.project_on(input, &timeline, Scenario::Severe)?;

        log::debug!(
            "Estimated {} over {} days (growth factor {}): impact infections={}, severeImpact infections={}",
            input.region.name,
            timeline.days,
            timeline.growth_factor,
            impact.infections_by_requested_time,
            severe_impact.infections_by_requested_time
        );

        Ok(EstimationResult::new(input.clone(), impact, severe_impact))
    }

    /// Project a single scenario
    pub fn project(&self, input: &EstimationInput, scenario: Scenario) -> Result<ScenarioMetrics> {
        validate_input(input, self.config.strict_period_type)?;
        let timeline = self.timeline(input);
        self.project_on(input, &timeline, scenario)
    }

    fn timeline(&self, input: &EstimationInput) -> Timeline {
        if !input.period_type.is_recognized() {
            log::warn!(
                "Unrecognized period type for {}, treating elapsed time as zero days",
                input.region.name
            );
        }

        let timeline = Timeline::new(
            input.period_type,
            input.time_to_elapse,
            self.config.rates.doubling_interval_days,
        );

        if timeline.is_zero_days() && self.config.zero_day_policy == ZeroDayPolicy::Zero {
            log::warn!(
                "Elapsed period for {} is zero days, reporting dollarsInFlight as 0",
                input.region.name
            );
        }

        timeline
    }

    fn project_on(
        &self,
        input: &EstimationInput,
        timeline: &Timeline,
        scenario: Scenario,
    ) -> Result<ScenarioMetrics> {
        let rates = &self.config.rates;
        let overflow = |stage: Stage| EstimateError::Overflow { stage, scenario };

        let currently_infected =
            stages::currently_infected(input.reported_cases, rates.case_multiplier(scenario))
                .ok_or_else(|| overflow(Stage::CurrentlyInfected))?;

        let infections =
            stages::infections_by_requested_time(currently_infected, timeline.growth_factor)
                .ok_or_else(|| overflow(Stage::InfectionsByRequestedTime))?;

        let severe_cases = stages::severe_cases(infections, rates.severe_case_rate)
            .ok_or_else(|| overflow(Stage::SevereCases))?;

        let hospital_beds = stages::hospital_beds(
            input.total_hospital_beds,
            rates.bed_availability_rate,
            severe_cases,
        )
        .ok_or_else(|| overflow(Stage::HospitalBeds))?;

        let icu_cases = stages::icu_cases(infections, rates.icu_rate)
            .ok_or_else(|| overflow(Stage::IcuCases))?;

        let ventilator_cases = stages::ventilator_cases(infections, rates.ventilator_rate)
            .ok_or_else(|| overflow(Stage::VentilatorCases))?;

        let dollars_in_flight = if timeline.is_zero_days() {
            match self.config.zero_day_policy {
                ZeroDayPolicy::Zero => 0,
                ZeroDayPolicy::Reject => return Err(EstimateError::DivisionByZero { scenario }),
            }
        } else {
            stages::dollars_in_flight(
                infections,
                input.region.daily_income_per_capita(),
                timeline.days,
            )
            .ok_or_else(|| overflow(Stage::DollarsInFlight))?
        };

        log::trace!(
            "{}: currentlyInfected={} infections={} severe={} beds={} icu={} ventilators={} dollars={}",
            scenario,
            currently_infected,
            infections,
            severe_cases,
            hospital_beds,
            icu_cases,
            ventilator_cases,
            dollars_in_flight
        );

        Ok(ScenarioMetrics {
            currently_infected,
            infections_by_requested_time: infections,
            severe_cases_by_requested_time: severe_cases,
            hospital_beds_by_requested_time: hospital_beds,
            cases_for_icu_by_requested_time: icu_cases,
            cases_for_ventilators_by_requested_time: ventilator_cases,
            dollars_in_flight,
        })
    }
}

/// Estimate with the default rates and policies
pub fn estimate(input: &EstimationInput) -> Result<EstimationResult> {
    ImpactEstimator::default().estimate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::ImpactRates;
    use outbreak_core::{PeriodType, Region};
    use rust_decimal::Decimal;
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

    #[test]
    fn test_baseline_projection() {
        let metrics = ImpactEstimator::default()
            .project(&make_input(), Scenario::Baseline)
            .unwrap();

        assert_eq!(metrics.currently_infected, 100);
        assert_eq!(metrics.infections_by_requested_time, 102_400);
        assert_eq!(metrics.severe_cases_by_requested_time, 15_360);
        assert_eq!(metrics.hospital_beds_by_requested_time, -15_353);
        assert_eq!(metrics.cases_for_icu_by_requested_time, 5_120);
        assert_eq!(metrics.cases_for_ventilators_by_requested_time, 2_048);
        assert_eq!(metrics.dollars_in_flight, 3_328);
    }

    #[test]
    fn test_estimate_matches_projections() {
        let estimator = ImpactEstimator::default();
        let input = make_input();
        let result = estimator.estimate(&input).unwrap();

        assert_eq!(result.data, input);
        for scenario in Scenario::ALL {
            assert_eq!(
                *result.scenario(scenario),
                estimator.project(&input, scenario).unwrap()
            );
        }
    }

    #[test]
    fn test_invalid_rates_rejected() {
        let config = EstimatorConfig {
            rates: ImpactRates {
                bed_availability_rate: dec!(-0.1),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            ImpactEstimator::new(config),
            Err(EstimateError::InvalidRates(_))
        ));
    }

    #[test]
    fn test_zero_days_reports_zero_dollars() {
        let input = make_input().with_period(PeriodType::Days, Decimal::ZERO);
        let result = estimate(&input).unwrap();

        assert_eq!(result.impact.infections_by_requested_time, 100);
        assert_eq!(result.impact.dollars_in_flight, 0);
        assert_eq!(result.severe_impact.dollars_in_flight, 0);
    }

    #[test]
    fn test_zero_days_rejected_by_policy() {
        let config = EstimatorConfig {
            zero_day_policy: ZeroDayPolicy::Reject,
            ..Default::default()
        };
        let estimator = ImpactEstimator::new(config).unwrap();
        let input = make_input().with_period(PeriodType::Days, Decimal::ZERO);

        assert_eq!(
            estimator.estimate(&input),
            Err(EstimateError::DivisionByZero {
                scenario: Scenario::Baseline
            })
        );
    }

    #[test]
    fn test_custom_rates() {
        let config = EstimatorConfig {
            rates: ImpactRates {
                baseline_case_multiplier: 5,
                doubling_interval_days: 5,
                ..Default::default()
            },
            ..Default::default()
        };
        let estimator = ImpactEstimator::new(config).unwrap();
        let metrics = estimator.project(&make_input(), Scenario::Baseline).unwrap();

        // 10 × 5 = 50, 30 days / 5 = 6 doublings -> 3200
        assert_eq!(metrics.currently_infected, 50);
        assert_eq!(metrics.infections_by_requested_time, 3_200);
    }
}
