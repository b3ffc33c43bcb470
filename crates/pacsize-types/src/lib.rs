//! Core types for the pacsize PACS storage estimator.
//!
//! This crate provides the fundamental data structures used throughout pacsize:
//!
//! - [`Row`] - One modality line of the input table
//! - [`RowField`] - Editable column of a row
//! - [`Modality`] - Imaging equipment code from a closed set
//! - [`Window`] - Projection window preset, in days
//! - [`Tier`] - Recommended equipment tier

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod modality;
mod row;
mod window;

pub use error::{InputError, PacsizeError, Result, WindowError};
pub use modality::{Modality, ModalityParseError};
pub use row::{Row, RowField, Tier};
pub use window::Window;
