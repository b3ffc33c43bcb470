//! Storage, bandwidth and tier estimation for the pacsize PACS calculator.
//!
//! This crate turns a table of modality rows and a projection window into
//! storage and network figures:
//!
//! - [`derive`] - Pure function from rows and window to an [`Estimate`]
//! - [`Estimate`] - Per-row and total sizes, bandwidth and recommended tier
//! - [`EstimatorState`] - The input table and window, loadable from JSON
//! - [`Session`] - Mutable state that recomputes its estimate on every edit

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calculator;
mod scenario;
mod session;

pub use calculator::{
    ANNUALIZATION_DAYS, BITS_PER_BYTE, COMPRESSION_RATIO, Estimate, LITE_TIER_MAX_GB, MB_PER_GB,
    SECONDS_PER_HOUR, WORKING_DAYS_PER_WEEK, derive, format_gb, recommend_tier, row_gb,
};
pub use scenario::{EstimatorState, SEED_ROWS};
pub use session::Session;
