//! Outbreak Impact Estimator
//!
//! Projects the impact of an outbreak from a handful of reported
//! observations. Every estimation is a pure function of its input:
//! no clock, no randomness, no state carried between calls.
//!
//! - **Time Normalization**: period → days → whole doubling intervals
//! - **Stages**: one pure function per derived metric
//! - **Validation**: boundary checks with field-level errors
//! - **Estimator**: runs the chain for the baseline and severe scenarios
//!
//! ## Usage
//!
//! ```rust,ignore
//! use outbreak_estimator::{ImpactEstimator, EstimatorConfig};
//!
//! let estimator = ImpactEstimator::new(EstimatorConfig::default())?;
//! let result = estimator.estimate(&input)?;
//!
//! println!("baseline infections: {}", result.impact.infections_by_requested_time);
//! println!("severe infections:   {}", result.severe_impact.infections_by_requested_time);
//! ```
//!
//! ## Degenerate inputs
//!
//! | Input | Default | Strict |
//! |-------|---------|--------|
//! | Unrecognized period type | zero days | `Validation` error (`strict_period_type`) |
//! | Zero elapsed days | `dollarsInFlight = 0` | `DivisionByZero` (`ZeroDayPolicy::Reject`) |

pub mod error;
pub mod estimator;
pub mod rates;
pub mod stages;
pub mod time;
pub mod validation;

// Re-export main types
pub use error::{EstimateError, Result};
pub use estimator::{ImpactEstimator, estimate};
pub use rates::{EstimatorConfig, ImpactRates, ZeroDayPolicy};
pub use stages::Stage;
pub use time::{Timeline, days_elapsed, growth_factor};
pub use validation::validate_input;
