//! Flat records shared by the machine-readable formats.

use pacsize_estimate::{Estimate, EstimatorState};
use pacsize_types::Tier;
use serde::Serialize;

/// One input row with its projected size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RowRecord {
    pub(crate) modality: &'static str,
    pub(crate) devices: u32,
    pub(crate) studies_per_day: u32,
    pub(crate) study_size_mb: f64,
    pub(crate) size_gb: f64,
}

/// Totals and recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Summary {
    pub(crate) window_days: u32,
    pub(crate) window_label: &'static str,
    pub(crate) total_gb: f64,
    pub(crate) compressed_gb: f64,
    pub(crate) bandwidth_gb_per_day: f64,
    pub(crate) bandwidth_mbps: f64,
    pub(crate) size_per_year_gb: f64,
    pub(crate) total_tb: f64,
    pub(crate) tier: Tier,
    pub(crate) tier_label: &'static str,
}

/// Complete JSON document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Report {
    pub(crate) rows: Vec<RowRecord>,
    pub(crate) summary: Summary,
}

pub(crate) fn row_records(state: &EstimatorState, estimate: &Estimate) -> Vec<RowRecord> {
    state
        .rows
        .iter()
        .zip(&estimate.per_row_gb)
        .map(|(row, &size_gb)| RowRecord {
            modality: row.modality.as_str(),
            devices: row.devices,
            studies_per_day: row.studies_per_day,
            study_size_mb: row.study_size_mb,
            size_gb,
        })
        .collect()
}

pub(crate) fn summary(state: &EstimatorState, estimate: &Estimate) -> Summary {
    Summary {
        window_days: estimate.window_days,
        window_label: state.window.label(),
        total_gb: estimate.total_gb,
        compressed_gb: estimate.compressed_gb,
        bandwidth_gb_per_day: estimate.bandwidth_gb_per_day,
        bandwidth_mbps: estimate.bandwidth_mbps,
        size_per_year_gb: estimate.size_per_year_gb,
        total_tb: estimate.total_tb,
        tier: estimate.tier,
        tier_label: estimate.tier.label(),
    }
}
