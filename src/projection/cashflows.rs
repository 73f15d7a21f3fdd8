//! Output structures for an ROI projection

use serde::{Deserialize, Serialize};

/// Cumulative position at the end of one contract year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPoint {
    /// Contract year, 0 being the baseline before any spend
    pub year: u32,
    pub year_label: String,
    pub cumulative_benefit: f64,
    pub cumulative_cost: f64,
}

impl CashFlowPoint {
    pub fn new(year: u32, cumulative_benefit: f64, cumulative_cost: f64) -> Self {
        Self {
            year,
            year_label: format!("Year {}", year),
            cumulative_benefit,
            cumulative_cost,
        }
    }

    /// Zero baseline row
    pub fn baseline() -> Self {
        Self::new(0, 0.0, 0.0)
    }

    /// Cumulative benefit less cumulative cost
    pub fn net_position(&self) -> f64 {
        self.cumulative_benefit - self.cumulative_cost
    }
}

/// Everything derived from one `Assumptions` snapshot.
///
/// Recomputed from scratch on every call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Average subscription cost per year over the term
    pub annual_cost: f64,
    pub total_investment: f64,

    // Benefit components, cumulative over the term
    pub productivity_gains: f64,
    pub turnover_reduction_savings: f64,
    pub training_time_savings: f64,
    pub total_benefit: f64,

    /// Benefit run-rate for a single year
    pub annual_benefit: f64,

    pub net_benefit: f64,
    pub total_roi_percent: f64,

    /// `None` when benefits never overtake costs under the model
    pub months_to_break_even: Option<f64>,

    /// Years 0..=term
    pub cash_flow_series: Vec<CashFlowPoint>,
}

impl DerivedMetrics {
    /// Share of total benefit coming from productivity gains, in percent
    pub fn productivity_share_percent(&self) -> f64 {
        if self.total_benefit > 0.0 {
            self.productivity_gains / self.total_benefit * 100.0
        } else {
            0.0
        }
    }

    /// Whether the model reaches break-even at all
    pub fn breaks_even(&self) -> bool {
        self.months_to_break_even.is_some()
    }

    /// Final point of the cash-flow series
    pub fn final_position(&self) -> Option<&CashFlowPoint> {
        self.cash_flow_series.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_label_and_net() {
        let point = CashFlowPoint::new(2, 1_500.0, 975.0);
        assert_eq!(point.year_label, "Year 2");
        assert_eq!(point.net_position(), 525.0);
        assert_eq!(CashFlowPoint::baseline().net_position(), 0.0);
    }

    #[test]
    fn test_point_serializes_camel_case() {
        let json = serde_json::to_value(CashFlowPoint::new(1, 10.0, 5.0)).unwrap();
        assert_eq!(json["yearLabel"], "Year 1");
        assert_eq!(json["cumulativeBenefit"], 10.0);
        assert_eq!(json["cumulativeCost"], 5.0);
    }
}
