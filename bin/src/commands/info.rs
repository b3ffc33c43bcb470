//! Periods command implementation.
//!
//! This module projects one input table over every window preset, so the
//! totals for a month, a year and five years can be compared side by side.

use crate::display::build_session;
use anyhow::Result;
use pacsize_lib::format_gb;
use pacsize_lib::prelude::*;
use std::path::Path;

/// Show the estimate for each window preset.
pub(crate) fn show_periods(scenario: Option<&Path>, rows: &[String]) -> Result<()> {
    let session = build_session(scenario, rows, None)?;

    println!(
        "{:<10} {:>16} {:>16} {:>8} {:>10}",
        "PERÍODO", "SEM COMPRESSÃO", "COM COMPRESSÃO", "TB", "MBIT/S"
    );
    println!("{}", "-".repeat(64));

    for &window in Window::all() {
        let estimate = derive(session.rows(), window);
        println!(
            "{:<10} {:>16} {:>16} {:>8} {:>10}",
            window.label(),
            format_gb(estimate.total_gb),
            format_gb(estimate.compressed_gb),
            estimate.total_tb_display(),
            estimate.bandwidth_display(),
        );
    }

    let tier = session.estimate().tier;
    println!("\nTipo de unidade recomendada: {tier}");
    println!("Obs.: largura de banda e tipo de unidade dependem da taxa diária, não do período.");

    Ok(())
}
