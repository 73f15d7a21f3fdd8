//! ROI projection: tiered cost schedule, flat-rate benefits, cash-flow series

mod state;
mod engine;
mod cashflows;

pub use state::ProjectionState;
pub use engine::{compute, AnnualBenefits, RoiEngine};
pub use cashflows::{CashFlowPoint, DerivedMetrics};
