mod input;
mod metrics;
mod period;
mod region;
mod result;
mod scenario;

pub use input::EstimationInput;
pub use metrics::ScenarioMetrics;
pub use period::PeriodType;
pub use region::Region;
pub use result::EstimationResult;
pub use scenario::Scenario;
