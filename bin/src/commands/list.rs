//! List commands: window presets and modality codes.

use anyhow::Result;
use pacsize_lib::prelude::*;

/// List the projection window presets.
pub(crate) fn list_windows() -> Result<()> {
    println!("{:<8} {:<10} {:<8}", "DAYS", "LABEL", "DEFAULT");
    println!("{}", "-".repeat(28));

    for window in Window::all() {
        let marker = if *window == Window::default() { "*" } else { "" };
        println!("{:<8} {:<10} {:<8}", window.days(), window.label(), marker);
    }

    println!("\nTotal: {} presets", Window::all().len());
    Ok(())
}

/// List the selectable modality codes.
pub(crate) fn list_modalities() -> Result<()> {
    for modality in Modality::all() {
        println!("{modality}");
    }

    println!("\nTotal: {} modalities", Modality::all().len());
    Ok(())
}
