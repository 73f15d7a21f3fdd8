//! Core ROI engine: assumptions in, derived metrics out

use crate::assumptions::{Assumptions, ModelConstants};
use super::cashflows::{CashFlowPoint, DerivedMetrics};
use super::state::ProjectionState;
use log::trace;

/// Annual benefit components before scaling by the term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualBenefits {
    pub productivity: f64,
    pub turnover: f64,
    pub training: f64,
}

impl AnnualBenefits {
    pub fn total(&self) -> f64 {
        self.productivity + self.turnover + self.training
    }
}

/// Stateless ROI calculator.
///
/// Holds only the model constants, so one engine can serve any number of
/// callers concurrently.
#[derive(Debug, Clone, Default)]
pub struct RoiEngine {
    constants: ModelConstants,
}

impl RoiEngine {
    pub fn new(constants: ModelConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &ModelConstants {
        &self.constants
    }

    /// Subscription spend for one contract year
    pub fn year_cost(&self, assumptions: &Assumptions, contract_year: u32) -> f64 {
        assumptions.employees as f64 * self.constants.pricing.rate_for_year(contract_year)
    }

    /// Benefit run-rate for a single year.
    ///
    /// Training savings use the fixed hours-saved constant; the
    /// `training_hours` input does not enter the formula.
    pub fn annual_benefits(&self, assumptions: &Assumptions) -> AnnualBenefits {
        let c = &self.constants;
        let employees = assumptions.employees as f64;
        let hourly_rate = c.hourly_rate(assumptions.salary);

        AnnualBenefits {
            productivity: employees * assumptions.salary * c.productivity_boost_rate,
            turnover: employees
                * assumptions.turnover_fraction()
                * c.turnover_reduction_rate
                * assumptions.replace_cost,
            training: employees * c.training_hours_saved_per_employee * hourly_rate,
        }
    }

    /// Run the full projection for one assumption snapshot
    pub fn compute(&self, assumptions: &Assumptions) -> DerivedMetrics {
        let term = assumptions.term;
        let annual = self.annual_benefits(assumptions);
        let annual_benefit = annual.total();

        // Cost is summed tier by tier; the series and the total share one pass
        let mut state = ProjectionState::new();
        let mut cash_flow_series = Vec::with_capacity(term as usize + 1);
        cash_flow_series.push(CashFlowPoint::baseline());

        for year in 1..=term {
            let cost = self.year_cost(assumptions, year);
            state.advance_year(cost, annual_benefit);
            trace!(
                "year {}: cost {:.2}, cumulative cost {:.2}, cumulative benefit {:.2}",
                year, cost, state.cumulative_cost, state.cumulative_benefit
            );
            cash_flow_series.push(state.to_point());
        }

        let total_investment = state.cumulative_cost;
        let annual_cost = if term > 0 {
            total_investment / term as f64
        } else {
            0.0
        };

        let years = term as f64;
        let productivity_gains = annual.productivity * years;
        let turnover_reduction_savings = annual.turnover * years;
        let training_time_savings = annual.training * years;
        let total_benefit = productivity_gains + turnover_reduction_savings + training_time_savings;

        let net_benefit = total_benefit - total_investment;
        let total_roi_percent = if total_investment > 0.0 {
            net_benefit / total_investment * 100.0
        } else {
            0.0
        };

        DerivedMetrics {
            annual_cost,
            total_investment,
            productivity_gains,
            turnover_reduction_savings,
            training_time_savings,
            total_benefit,
            annual_benefit,
            net_benefit,
            total_roi_percent,
            months_to_break_even: months_to_break_even(total_investment, annual_benefit, annual_cost),
            cash_flow_series,
        }
    }
}

/// Months until the benefit run-rate pays back the investment.
///
/// Defined only while the annual benefit exceeds the average annual cost;
/// never negative or infinite.
fn months_to_break_even(total_investment: f64, annual_benefit: f64, annual_cost: f64) -> Option<f64> {
    if annual_benefit > annual_cost {
        let months = total_investment / (annual_benefit - annual_cost) * 12.0;
        Some(months).filter(|m| m.is_finite() && *m >= 0.0)
    } else {
        None
    }
}

/// Compute metrics with the standard model constants
pub fn compute(assumptions: &Assumptions) -> DerivedMetrics {
    RoiEngine::default().compute(assumptions)
}
