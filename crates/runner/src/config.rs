//! Configuration and request loading
//!
//! Supports JSON files for:
//! - Estimator configuration (rates, zero-day policy, strict period type)
//! - Estimation requests (one `EstimationInput` per file or stdin)
//!
//! Every estimator config field has a default, so a partial file only
//! overrides what it names.

use outbreak_core::EstimationInput;
use outbreak_estimator::EstimatorConfig;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, RunnerError};

fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(path.as_ref()).map_err(|source| RunnerError::Read {
        path: path.as_ref().display().to_string(),
        source,
    })
}

/// Load estimator configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EstimatorConfig> {
    load_config_from_str(&read_file(path)?)
}

/// Load estimator configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<EstimatorConfig> {
    let config: EstimatorConfig = serde_json::from_str(json)?;
    config.rates.validate()?;
    Ok(config)
}

/// Load an estimation request from a JSON file
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<EstimationInput> {
    load_input_from_str(&read_file(path)?)
}

/// Load an estimation request from a reader (e.g. stdin)
pub fn load_input_from_reader<R: Read>(mut reader: R) -> Result<EstimationInput> {
    let mut body = String::new();
    reader.read_to_string(&mut body)?;
    load_input_from_str(&body)
}

/// Parse an estimation request body
pub fn load_input_from_str(body: &str) -> Result<EstimationInput> {
    if body.trim().is_empty() {
        return Err(RunnerError::EmptyRequest);
    }
    Ok(serde_json::from_str(body)?)
}
