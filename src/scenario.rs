//! Scenario runner for batches of assumption snapshots
//!
//! Holds one engine and evaluates many independent snapshots against it,
//! in parallel where there is more than one.

use crate::assumptions::{Assumptions, ModelConstants};
use crate::projection::{DerivedMetrics, RoiEngine};
use log::debug;
use rayon::prelude::*;

/// Single assumption field varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariable {
    Employees,
    Salary,
    TrainingHours,
    Turnover,
    ReplaceCost,
    Term,
}

impl SweepVariable {
    /// Copy of `base` with this field set to `value`.
    /// Integer fields round and saturate at zero.
    pub fn apply(&self, base: &Assumptions, value: f64) -> Assumptions {
        let mut a = *base;
        match self {
            SweepVariable::Employees => a.employees = to_count(value),
            SweepVariable::Salary => a.salary = value,
            SweepVariable::TrainingHours => a.training_hours = to_count(value),
            SweepVariable::Turnover => a.turnover = value,
            SweepVariable::ReplaceCost => a.replace_cost = value,
            SweepVariable::Term => a.term = to_count(value),
        }
        a
    }
}

fn to_count(value: f64) -> u32 {
    // `as` maps NaN to 0 and saturates at the u32 bounds
    value.round() as u32
}

/// Pre-built engine for running many snapshots
///
/// # Example
/// ```
/// use roi_calculator::{Assumptions, ScenarioRunner};
/// use roi_calculator::scenario::SweepVariable;
///
/// let runner = ScenarioRunner::new();
/// let base = Assumptions::default();
/// let results = runner.sweep(&base, SweepVariable::Term, &[1.0, 3.0, 5.0]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: RoiEngine,
}

impl ScenarioRunner {
    /// Runner with the standard model constants
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(constants: ModelConstants) -> Self {
        Self {
            engine: RoiEngine::new(constants),
        }
    }

    pub fn run(&self, assumptions: &Assumptions) -> DerivedMetrics {
        self.engine.compute(assumptions)
    }

    /// Evaluate every snapshot; results keep input order
    pub fn run_batch(&self, scenarios: &[Assumptions]) -> Vec<DerivedMetrics> {
        debug!("Running batch of {} scenarios", scenarios.len());
        scenarios.par_iter().map(|a| self.engine.compute(a)).collect()
    }

    /// Re-run `base` with one field replaced by each of `values`
    pub fn sweep(
        &self,
        base: &Assumptions,
        variable: SweepVariable,
        values: &[f64],
    ) -> Vec<(f64, DerivedMetrics)> {
        debug!("Sweeping {:?} over {} values", variable, values.len());
        values
            .par_iter()
            .map(|&value| (value, self.engine.compute(&variable.apply(base, value))))
            .collect()
    }

    pub fn engine(&self) -> &RoiEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute;

    #[test]
    fn test_batch_matches_single_runs_in_order() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<Assumptions> = (1..=5)
            .map(|term| Assumptions { term, employees: 100 * term, ..Assumptions::default() })
            .collect();

        let results = runner.run_batch(&scenarios);
        assert_eq!(results.len(), scenarios.len());
        for (a, m) in scenarios.iter().zip(&results) {
            assert_eq!(*m, compute(a));
            assert_eq!(m.cash_flow_series.len(), a.term as usize + 1);
        }
    }

    #[test]
    fn test_sweep_employees_is_monotonic() {
        let runner = ScenarioRunner::new();
        let values: Vec<f64> = (1..=20).map(|i| (i * 100) as f64).collect();
        let results = runner.sweep(&Assumptions::default(), SweepVariable::Employees, &values);

        assert_eq!(results.len(), values.len());
        for pair in results.windows(2) {
            assert!(pair[1].0 > pair[0].0);
            assert!(pair[1].1.total_benefit >= pair[0].1.total_benefit);
            assert!(pair[1].1.total_investment >= pair[0].1.total_investment);
        }
    }

    #[test]
    fn test_sweep_apply_integer_fields() {
        let base = Assumptions::default();
        assert_eq!(SweepVariable::Term.apply(&base, 4.6).term, 5);
        assert_eq!(SweepVariable::Employees.apply(&base, -20.0).employees, 0);
        assert_eq!(SweepVariable::Turnover.apply(&base, 22.5).turnover, 22.5);
        assert_eq!(SweepVariable::TrainingHours.apply(&base, 12.0).training_hours, 12);
    }

    #[test]
    fn test_custom_constants() {
        let constants = ModelConstants {
            productivity_boost_rate: 0.0,
            ..ModelConstants::default()
        };
        let runner = ScenarioRunner::with_constants(constants);
        let m = runner.run(&Assumptions::default());

        assert_eq!(m.productivity_gains, 0.0);
        assert_eq!(m.productivity_share_percent(), 0.0);
    }
}
