//! Storage and bandwidth estimation.
//!
//! Every figure is derived from the current rows and window in a single pass.
//! Operations are evaluated left to right exactly as written so results stay
//! reproducible across front ends.

use pacsize_types::{Row, Tier, Window};
use serde::Serialize;

/// Megabytes per gigabyte (decimal convention).
pub const MB_PER_GB: f64 = 1000.0;

/// Fraction of the raw size saved by DICOM compression.
pub const COMPRESSION_RATIO: f64 = 0.40;

/// Working days per week the daily load is spread over.
pub const WORKING_DAYS_PER_WEEK: f64 = 5.0;

/// Seconds the working-day load is spread over.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Bits per byte.
pub const BITS_PER_BYTE: f64 = 8.0;

/// Days multiplied into the daily rate for the tier decision.
pub const ANNUALIZATION_DAYS: f64 = 31.0;

/// Largest annualized size, in GB, still served by the Lite tier.
pub const LITE_TIER_MAX_GB: f64 = 1000.0;

/// Derived figures for one input state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    /// Window the figures were projected over.
    pub window_days: u32,
    /// Uncompressed size of each row over the window, in input order.
    pub per_row_gb: Vec<f64>,
    /// Sum of all rows, uncompressed.
    pub total_gb: f64,
    /// Total after the assumed compression. Informational only.
    pub compressed_gb: f64,
    /// Average volume produced per day.
    pub bandwidth_gb_per_day: f64,
    /// Minimum network bandwidth, rounded to a whole Mbit/s.
    pub bandwidth_mbps: f64,
    /// Daily rate scaled by [`ANNUALIZATION_DAYS`]; drives the tier.
    pub size_per_year_gb: f64,
    /// Uncompressed total in whole terabytes, rounded up.
    pub total_tb: f64,
    /// Recommended equipment tier.
    pub tier: Tier,
}

impl Estimate {
    /// Returns the uncompressed total formatted with two decimals.
    #[must_use]
    pub fn total_display(&self) -> String {
        format_gb(self.total_gb)
    }

    /// Returns the compressed total formatted with two decimals.
    #[must_use]
    pub fn compressed_display(&self) -> String {
        format_gb(self.compressed_gb)
    }

    /// Returns the bandwidth formatted with three decimals.
    #[must_use]
    pub fn bandwidth_display(&self) -> String {
        format!("{:.3}", self.bandwidth_mbps)
    }

    /// Returns the terabyte figure formatted with two decimals.
    #[must_use]
    pub fn total_tb_display(&self) -> String {
        format!("{:.2}", self.total_tb)
    }
}

/// Computes the projected size of a single row over the window, in GB.
#[must_use]
pub fn row_gb(row: &Row, window: Window) -> f64 {
    f64::from(row.studies_per_day) * f64::from(row.devices) * row.study_size_mb
        * window.days_f64()
        / MB_PER_GB
}

/// Picks the tier for an annualized size.
#[must_use]
pub fn recommend_tier(size_per_year_gb: f64) -> Tier {
    if size_per_year_gb <= LITE_TIER_MAX_GB {
        Tier::Lite
    } else {
        Tier::Standard
    }
}

/// Derives every output figure from the rows and window.
///
/// An empty slice yields zero totals and the Lite tier.
#[must_use]
pub fn derive(rows: &[Row], window: Window) -> Estimate {
    let days = window.days_f64();
    let per_row_gb: Vec<f64> = rows.iter().map(|row| row_gb(row, window)).collect();
    let total_gb = per_row_gb.iter().fold(0.0, |acc, gb| acc + gb);

    let compressed_gb = total_gb - total_gb * COMPRESSION_RATIO;
    let bandwidth_gb_per_day = total_gb / days;
    let bandwidth_mbps = (bandwidth_gb_per_day / WORKING_DAYS_PER_WEEK / SECONDS_PER_HOUR
        * MB_PER_GB
        * BITS_PER_BYTE)
        .round();
    let size_per_year_gb = (total_gb / days) * ANNUALIZATION_DAYS;
    let total_tb = (total_gb / MB_PER_GB).ceil();

    Estimate {
        window_days: window.days(),
        per_row_gb,
        total_gb,
        compressed_gb,
        bandwidth_gb_per_day,
        bandwidth_mbps,
        size_per_year_gb,
        total_tb,
        tier: recommend_tier(size_per_year_gb),
    }
}

/// Formats a gigabyte figure with two decimals (e.g., "13114.45 GB").
#[must_use]
pub fn format_gb(gb: f64) -> String {
    format!("{gb:.2} GB")
}
