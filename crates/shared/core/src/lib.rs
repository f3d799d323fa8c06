//! Outbreak Core Domain
//!
//! Pure domain types for the outbreak impact estimator.
//! This crate contains no I/O and no estimation logic, and is 100% unit testable.
//!
//! The wire shape of every type follows the camelCase field names used by
//! request/response collaborators:
//!
//! ```text
//! EstimationInput ──► (estimator) ──► EstimationResult
//!                                       ├── data          (the input, echoed)
//!                                       ├── impact        (baseline ScenarioMetrics)
//!                                       └── severeImpact  (severe ScenarioMetrics)
//! ```

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    EstimationInput, EstimationResult, PeriodType, Region, Scenario, ScenarioMetrics,
};
pub use values::{BedBalance, Count, Dollars, Rate};
