//! Request payload for the narrative-summary service and the text shown when
//! that service cannot be reached.
//!
//! Nothing here feeds back into the engine; narrative text is display-only.

use crate::assumptions::Assumptions;
use crate::format::{format_break_even, format_compact_currency, format_count, format_percent};
use crate::projection::DerivedMetrics;
use serde::{Deserialize, Serialize};

/// Summary numbers handed to the narrative generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeRequest {
    pub roi_percent: f64,
    pub net_benefit: f64,
    pub months_to_break_even: Option<f64>,
    /// Productivity gains as a percentage of total benefit
    pub productivity_share_percent: f64,
    pub employees: u32,
    pub term: u32,
}

impl NarrativeRequest {
    pub fn from_metrics(assumptions: &Assumptions, metrics: &DerivedMetrics) -> Self {
        Self {
            roi_percent: metrics.total_roi_percent,
            net_benefit: metrics.net_benefit,
            months_to_break_even: metrics.months_to_break_even,
            productivity_share_percent: metrics.productivity_share_percent(),
            employees: assumptions.employees,
            term: assumptions.term,
        }
    }

    /// Prompt text sent to the generator
    pub fn prompt(&self) -> String {
        format!(
            "Write a short executive summary of a training investment for {} employees \
             over {} year(s). Total ROI: {}. Net benefit: {}. Break-even: {}. \
             Productivity gains make up {} of the total benefit.",
            format_count(self.employees as u64),
            self.term,
            format_percent(self.roi_percent),
            format_compact_currency(self.net_benefit),
            format_break_even(self.months_to_break_even),
            format_percent(self.productivity_share_percent),
        )
    }

    /// Deterministic summary used when the generator is unavailable
    pub fn fallback_summary(&self) -> String {
        let headline = format!(
            "Across {} employees over {} year(s), the projected return is {} with a net benefit of {}.",
            format_count(self.employees as u64),
            self.term,
            format_percent(self.roi_percent),
            format_compact_currency(self.net_benefit),
        );

        let payback = match self.months_to_break_even {
            Some(_) => format!(
                " The investment pays back in about {}.",
                format_break_even(self.months_to_break_even)
            ),
            None => " Benefits do not overtake costs within the model.".to_string(),
        };

        format!(
            "{}{} Productivity gains account for {} of the total benefit.",
            headline,
            payback,
            format_percent(self.productivity_share_percent)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute;

    #[test]
    fn test_request_carries_summary_numbers_only() {
        let a = Assumptions::new(10, 20_000.0, 0, 0.0, 5_000.0, 1);
        let m = compute(&a);
        let request = NarrativeRequest::from_metrics(&a, &m);

        assert_eq!(request.employees, 10);
        assert_eq!(request.term, 1);
        assert_eq!(request.roi_percent, m.total_roi_percent);
        assert_eq!(request.months_to_break_even, m.months_to_break_even);
        // 10000 / 10961.54
        assert!((request.productivity_share_percent - 91.228).abs() < 1e-3);
    }

    #[test]
    fn test_fallback_with_break_even() {
        let a = Assumptions::new(10, 20_000.0, 0, 0.0, 5_000.0, 1);
        let text = NarrativeRequest::from_metrics(&a, &compute(&a)).fallback_summary();

        assert!(text.contains("10 employees"));
        assert!(text.contains("119%"));
        assert!(text.contains("$6K"));
        assert!(text.contains("10.1 mo"));
        assert!(text.contains("91%"));
    }

    #[test]
    fn test_fallback_without_break_even() {
        let a = Assumptions::new(50, 2_000.0, 0, 0.0, 5_000.0, 1);
        let text = NarrativeRequest::from_metrics(&a, &compute(&a)).fallback_summary();

        assert!(text.contains("do not overtake costs"));
        assert!(!text.contains(" mo."));
    }

    #[test]
    fn test_prompt_mentions_inputs() {
        let a = Assumptions { employees: 1_250, ..Assumptions::default() };
        let prompt = NarrativeRequest::from_metrics(&a, &compute(&a)).prompt();

        assert!(prompt.contains("1,250 employees"));
        assert!(prompt.contains("over 3 year(s)"));
    }
}
