//! Business assumptions for an ROI projection and the fixed model constants

mod model;
pub mod loader;

pub use model::{ModelConstants, PricingSchedule};
pub use loader::{load_scenarios, load_scenarios_from_reader};

use serde::{Deserialize, Serialize};

/// Lower bound for headcount on the calculator sliders
pub const MIN_EMPLOYEES: u32 = 10;
/// Upper bound for headcount on the calculator sliders
pub const MAX_EMPLOYEES: u32 = 2000;
pub const MIN_SALARY: f64 = 20_000.0;
pub const MAX_TRAINING_HOURS: u32 = 100;
pub const MIN_REPLACE_COST: f64 = 5_000.0;
pub const MIN_TERM: u32 = 1;
pub const MAX_TERM: u32 = 5;

/// One snapshot of the calculator inputs
///
/// A fresh value is built on every interaction and passed whole into the
/// engine, which never holds on to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumptions {
    /// Headcount covered by the subscription
    pub employees: u32,

    /// Annual salary per employee
    pub salary: f64,

    /// Training hours per employee per year.
    /// Shown to the user but not used by the training-savings formula.
    pub training_hours: u32,

    /// Annual attrition rate as a percentage (0-100)
    pub turnover: f64,

    /// Cost to replace one departing employee
    pub replace_cost: f64,

    /// Analysis horizon in years
    pub term: u32,
}

impl Default for Assumptions {
    /// Initial slider positions of the calculator
    fn default() -> Self {
        Self {
            employees: 100,
            salary: 60_000.0,
            training_hours: 40,
            turnover: 15.0,
            replace_cost: 15_000.0,
            term: 3,
        }
    }
}

impl Assumptions {
    pub fn new(
        employees: u32,
        salary: f64,
        training_hours: u32,
        turnover: f64,
        replace_cost: f64,
        term: u32,
    ) -> Self {
        Self {
            employees,
            salary,
            training_hours,
            turnover,
            replace_cost,
            term,
        }
    }

    /// Copy of these assumptions with every field pulled into the range the
    /// calculator UI allows. The engine itself never clamps.
    pub fn clamped(&self) -> Self {
        Self {
            employees: self.employees.clamp(MIN_EMPLOYEES, MAX_EMPLOYEES),
            salary: floor_at(self.salary, MIN_SALARY),
            training_hours: self.training_hours.min(MAX_TRAINING_HOURS),
            turnover: if self.turnover.is_nan() {
                0.0
            } else {
                self.turnover.clamp(0.0, 100.0)
            },
            replace_cost: floor_at(self.replace_cost, MIN_REPLACE_COST),
            term: self.term.clamp(MIN_TERM, MAX_TERM),
        }
    }

    /// Turnover expressed as a fraction (15% -> 0.15)
    pub fn turnover_fraction(&self) -> f64 {
        self.turnover / 100.0
    }
}

/// `f64::max` already discards NaN in favour of the other operand
fn floor_at(value: f64, min: f64) -> f64 {
    value.max(min)
}
