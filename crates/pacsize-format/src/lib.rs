//! Report formatters for the pacsize PACS storage estimator.
//!
//! This crate provides formatters for writing an input table and its
//! estimate to various output formats:
//!
//! - [`TableFormatter`] - Portuguese text report with totals and recommendation
//! - [`JsonFormatter`] - JSON document or NDJSON format
//! - [`CsvFormatter`] - Per-row CSV or TSV breakdown

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod record;
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use table::{TableFormatter, WORKING_WEEK_CAPTION};
