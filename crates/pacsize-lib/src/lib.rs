//! PACS storage, bandwidth and equipment-tier estimator.
//!
//! This is a facade crate that re-exports functionality from the pacsize
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use pacsize_lib::prelude::*;
//!
//! let mut session = Session::seeded();
//! session.set_window(Window::Years5);
//! session.update_field(0, RowField::Devices, "3").unwrap();
//!
//! let estimate = session.estimate();
//! println!("{} -> {}", estimate.total_display(), estimate.tier);
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use pacsize_types::*;

// Re-export estimation
pub use pacsize_estimate::{
    ANNUALIZATION_DAYS, BITS_PER_BYTE, COMPRESSION_RATIO, Estimate, EstimatorState,
    LITE_TIER_MAX_GB, MB_PER_GB, SECONDS_PER_HOUR, SEED_ROWS, Session, WORKING_DAYS_PER_WEEK,
    derive, format_gb, recommend_tier, row_gb,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use pacsize_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TableFormatter,
    WORKING_WEEK_CAPTION,
};

/// Prelude module for convenient imports.
///
/// ```
/// use pacsize_lib::prelude::*;
/// ```
pub mod prelude {
    pub use pacsize_types::{
        InputError, Modality, PacsizeError, Result, Row, RowField, Tier, Window, WindowError,
    };

    pub use pacsize_estimate::{Estimate, EstimatorState, Session, derive};

    #[cfg(feature = "format")]
    pub use pacsize_format::{
        CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat, TableFormatter,
    };
}
