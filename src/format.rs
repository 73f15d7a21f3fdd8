//! Display formatting shared by the live calculator and the exported report.
//!
//! Both consumers must render through these helpers so the same metrics
//! never show up as different text.

use crate::projection::DerivedMetrics;
use serde::{Deserialize, Serialize};

/// Text shown when there is no finite break-even
pub const NOT_APPLICABLE: &str = "N/A";

/// Group an integer's digits in threes: 1234500 -> "1,234,500"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round to the nearest whole number, mapping NaN to zero and folding -0
fn round_to_i64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    // `as` saturates at the i64 bounds
    value.round() as i64
}

/// Whole-dollar currency: `$1,234,500`, `-$950`
pub fn format_currency(value: f64) -> String {
    let rounded = round_to_i64(value);
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.unsigned_abs()))
}

/// Short currency for chart axes and headline figures.
///
/// Thresholds compare the signed value, so negative amounts always fall
/// back to full currency formatting.
pub fn format_compact_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${}K", round_to_i64(value / 1_000.0))
    } else {
        format_currency(value)
    }
}

/// Whole-number percentage: `119%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", round_to_i64(value))
}

/// `10.1 mo`, or `N/A` when there is no finite break-even
pub fn format_break_even(months: Option<f64>) -> String {
    match months {
        Some(m) if m.is_finite() => format!("{:.1} mo", m),
        _ => NOT_APPLICABLE.to_string(),
    }
}

/// Plain grouped count: `2,000`
pub fn format_count(count: u64) -> String {
    group_thousands(count)
}

/// Headline figures as the user sees them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySummary {
    pub total_investment: String,
    pub annual_cost: String,
    pub productivity_gains: String,
    pub turnover_reduction_savings: String,
    pub training_time_savings: String,
    pub total_benefit: String,
    pub net_benefit: String,
    pub net_benefit_compact: String,
    pub total_roi: String,
    pub break_even: String,
}

impl DisplaySummary {
    pub fn from_metrics(metrics: &DerivedMetrics) -> Self {
        Self {
            total_investment: format_currency(metrics.total_investment),
            annual_cost: format_currency(metrics.annual_cost),
            productivity_gains: format_currency(metrics.productivity_gains),
            turnover_reduction_savings: format_currency(metrics.turnover_reduction_savings),
            training_time_savings: format_currency(metrics.training_time_savings),
            total_benefit: format_currency(metrics.total_benefit),
            net_benefit: format_currency(metrics.net_benefit),
            net_benefit_compact: format_compact_currency(metrics.net_benefit),
            total_roi: format_percent(metrics.total_roi_percent),
            break_even: format_break_even(metrics.months_to_break_even),
        }
    }
}
