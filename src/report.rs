//! Export record for the downloadable report
//!
//! A report is assembled once from a single assumption snapshot and is then
//! only serialized. Renderers read the figures from here and never
//! recompute them.

use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::format::DisplaySummary;
use crate::narrative::NarrativeRequest;
use crate::projection::{compute, CashFlowPoint, DerivedMetrics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Row layout of the cash-flow CSV export
#[derive(Debug, Serialize)]
struct CashFlowCsvRow<'a> {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Label")]
    label: &'a str,
    #[serde(rename = "CumulativeBenefit")]
    cumulative_benefit: f64,
    #[serde(rename = "CumulativeCost")]
    cumulative_cost: f64,
    #[serde(rename = "NetPosition")]
    net_position: f64,
}

impl<'a> From<&'a CashFlowPoint> for CashFlowCsvRow<'a> {
    fn from(point: &'a CashFlowPoint) -> Self {
        Self {
            year: point.year,
            label: &point.year_label,
            cumulative_benefit: point.cumulative_benefit,
            cumulative_cost: point.cumulative_cost,
            net_position: point.net_position(),
        }
    }
}

/// Everything the export renderer needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiReport {
    pub generated_at: DateTime<Utc>,
    pub assumptions: Assumptions,
    pub metrics: DerivedMetrics,
    pub display: DisplaySummary,
    pub narrative: NarrativeRequest,
}

impl RoiReport {
    /// Package already-computed metrics with the snapshot they came from
    pub fn new(assumptions: Assumptions, metrics: DerivedMetrics, generated_at: DateTime<Utc>) -> Self {
        let display = DisplaySummary::from_metrics(&metrics);
        let narrative = NarrativeRequest::from_metrics(&assumptions, &metrics);
        Self {
            generated_at,
            assumptions,
            metrics,
            display,
            narrative,
        }
    }

    /// Compute once for the given snapshot and package the result
    pub fn from_assumptions(assumptions: Assumptions, generated_at: DateTime<Utc>) -> Self {
        let metrics = compute(&assumptions);
        Self::new(assumptions, metrics, generated_at)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the year-by-year series as CSV
    pub fn write_cash_flow_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        for point in &self.metrics.cash_flow_series {
            out.serialize(CashFlowCsvRow::from(point))?;
        }
        out.flush()?;
        Ok(())
    }
}
