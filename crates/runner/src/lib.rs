//! Outbreak Runner
//!
//! Thin host around the impact estimator:
//!
//! - **Config**: estimator configuration and request loading from JSON
//! - **Run**: one request in, one rendered result out
//!
//! ```text
//!   --config <PATH> ──► EstimatorConfig ──► ImpactEstimator
//!                                                │
//!   --input <PATH> | stdin ──► EstimationInput ──┤
//!                                                ▼
//!                                        EstimationResult ──► JSON on stdout
//! ```

pub mod config;
pub mod error;

pub use config::{
    load_config, load_config_from_str, load_input, load_input_from_reader, load_input_from_str,
};
pub use error::{Result, RunnerError};

use outbreak_core::{EstimationInput, EstimationResult};
use outbreak_estimator::{EstimatorConfig, ImpactEstimator};

/// Estimate one request with the given configuration
pub fn run(input: &EstimationInput, config: EstimatorConfig) -> Result<EstimationResult> {
    let estimator = ImpactEstimator::new(config)?;
    Ok(estimator.estimate(input)?)
}

/// Render a result as JSON
pub fn render(result: &EstimationResult, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(result)?
    } else {
        serde_json::to_string_pretty(result)?
    };
    Ok(json)
}
