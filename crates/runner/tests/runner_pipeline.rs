//! Runner Integration Test
//!
//! Tests the host flow end to end:
//! 1. Config and request are loaded from JSON files
//! 2. One estimation runs with the loaded config
//! 3. The result renders as JSON with the response field names

use outbreak_core::PeriodType;
use outbreak_estimator::{EstimateError, EstimatorConfig};
use outbreak_runner::{RunnerError, load_config, load_input, render, run};
use rust_decimal::Decimal;
use std::path::PathBuf;

const REQUEST: &str = r#"{
    "region": {
        "name": "Africa",
        "avgAge": 19.7,
        "avgDailyIncomeInUSD": 1.5,
        "avgDailyIncomePopulation": 0.65
    },
    "periodType": "days",
    "timeToElapse": 30,
    "reportedCases": 10,
    "population": 1000,
    "totalHospitalBeds": 20
}"#;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let file_name = format!("outbreak-runner-{}-{}", std::process::id(), name);
    let path = std::env::temp_dir().join(file_name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_file_round_trip() {
    let _ = env_logger::try_init();

    let request_path = write_temp("request.json", REQUEST);
    let input = load_input(&request_path).unwrap();
    let result = run(&input, EstimatorConfig::default()).unwrap();

    let rendered = render(&result, true).unwrap();
    assert!(!rendered.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["impact"]["currentlyInfected"], 100);
    assert_eq!(value["impact"]["dollarsInFlight"], 3328);
    assert_eq!(value["severeImpact"]["currentlyInfected"], 500);
    assert_eq!(value["severeImpact"]["hospitalBedsByRequestedTime"], -76793);
    assert_eq!(value["data"]["timeToElapse"], 30.0);

    let _ = std::fs::remove_file(request_path);
}

#[test]
fn test_config_file_applies_policy() {
    let config_path = write_temp("strict.json", r#"{"zero_day_policy": "reject"}"#);
    let config = load_config(&config_path).unwrap();

    let mut input = outbreak_runner::load_input_from_str(REQUEST).unwrap();
    input = input.with_period(PeriodType::Days, Decimal::ZERO);

    let err = run(&input, config).unwrap_err();
    assert!(matches!(
        err,
        RunnerError::Estimate(EstimateError::DivisionByZero { .. })
    ));

    let _ = std::fs::remove_file(config_path);
}

#[test]
fn test_malformed_request() {
    let request_path = write_temp("broken.json", r#"{"region": "#);
    assert!(matches!(
        load_input(&request_path),
        Err(RunnerError::Parse(_))
    ));
    let _ = std::fs::remove_file(request_path);
}

#[test]
fn test_pretty_render() {
    let input = outbreak_runner::load_input_from_str(REQUEST).unwrap();
    let result = run(&input, EstimatorConfig::default()).unwrap();

    let rendered = render(&result, false).unwrap();
    assert!(rendered.contains("\"severeImpact\""));
    assert!(rendered.contains("\"casesForICUByRequestedTime\": 5120"));
}
