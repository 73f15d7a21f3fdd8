//! Running totals while stepping through contract years

use super::cashflows::CashFlowPoint;

/// Position of a projection at the end of a contract year
#[derive(Debug, Clone, Default)]
pub struct ProjectionState {
    /// Contract year just completed (0 = before year 1)
    pub year: u32,

    /// Subscription spend to date
    pub cumulative_cost: f64,

    /// Benefit realized to date
    pub cumulative_benefit: f64,
}

impl ProjectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close out the next contract year with its cost and benefit
    pub fn advance_year(&mut self, year_cost: f64, annual_benefit: f64) {
        self.year += 1;
        self.cumulative_cost += year_cost;
        // Flat run-rate: benefit after `y` years is `annual_benefit * y`
        self.cumulative_benefit = annual_benefit * self.year as f64;
    }

    pub fn to_point(&self) -> CashFlowPoint {
        CashFlowPoint::new(self.year, self.cumulative_benefit, self.cumulative_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_cost_and_scales_benefit() {
        let mut state = ProjectionState::new();
        state.advance_year(500.0, 1_000.0);
        state.advance_year(475.0, 1_000.0);

        assert_eq!(state.year, 2);
        assert_eq!(state.cumulative_cost, 975.0);
        assert_eq!(state.cumulative_benefit, 2_000.0);

        let point = state.to_point();
        assert_eq!(point.year_label, "Year 2");
    }
}
