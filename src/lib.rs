//! ROI Calculator - deterministic cost/benefit projection behind the
//! lead-capture calculator and its exported report
//!
//! This library provides:
//! - The ROI engine: tiered subscription cost, flat-rate benefits, break-even
//! - Year-by-year cumulative cash-flow series
//! - Display formatting shared by the live view and the report
//! - Report assembly and narrative-service request payloads
//! - Batch and sweep evaluation of assumption scenarios

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod format;
pub mod narrative;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::RoiError;
pub use assumptions::{Assumptions, ModelConstants, PricingSchedule};
pub use projection::{compute, RoiEngine, DerivedMetrics, CashFlowPoint};
pub use format::DisplaySummary;
pub use narrative::NarrativeRequest;
pub use report::RoiReport;
pub use scenario::ScenarioRunner;
