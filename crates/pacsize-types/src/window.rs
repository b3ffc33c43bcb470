//! Projection window presets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::WindowError;

/// Time span over which study volume is projected.
///
/// Only these six presets exist, so the day count is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum Window {
    /// One day.
    Day1,
    /// One month (31 days).
    Month1,
    /// Six months (180 days).
    Months6,
    /// One year (365 days).
    #[default]
    Year1,
    /// Three years (1095 days).
    Years3,
    /// Five years (1825 days).
    Years5,
}

impl Window {
    /// Returns the number of days covered by the window.
    #[must_use]
    pub const fn days(&self) -> u32 {
        match self {
            Self::Day1 => 1,
            Self::Month1 => 31,
            Self::Months6 => 180,
            Self::Year1 => 365,
            Self::Years3 => 1095,
            Self::Years5 => 1825,
        }
    }

    /// Returns the day count as f64 for size calculations.
    #[must_use]
    pub fn days_f64(&self) -> f64 {
        f64::from(self.days())
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Day1 => "1 dia",
            Self::Month1 => "1 mês",
            Self::Months6 => "6 meses",
            Self::Year1 => "1 ano",
            Self::Years3 => "3 anos",
            Self::Years5 => "5 anos",
        }
    }

    /// Returns true if the projection assumes a five-day working week.
    ///
    /// Every preset longer than a single day does.
    #[must_use]
    pub const fn assumes_working_week(&self) -> bool {
        !matches!(self, Self::Day1)
    }

    /// Looks up the preset with exactly `days` days.
    #[must_use]
    pub fn from_days(days: u32) -> Option<Self> {
        Self::all().iter().copied().find(|w| w.days() == days)
    }

    /// Returns all presets, shortest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Day1,
            Self::Month1,
            Self::Months6,
            Self::Year1,
            Self::Years3,
            Self::Years5,
        ]
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u32> for Window {
    type Error = WindowError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::from_days(days).ok_or(WindowError::NotAPreset(days))
    }
}

impl From<Window> for u32 {
    fn from(window: Window) -> Self {
        window.days()
    }
}

impl FromStr for Window {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Ok(days) = key.parse::<u32>() {
            return Self::try_from(days);
        }
        match key.as_str() {
            "1d" | "d1" | "day" | "1dia" | "dia" => Ok(Self::Day1),
            "1m" | "m1" | "month" | "1mes" | "1mês" | "mes" | "mês" => Ok(Self::Month1),
            "6m" | "m6" | "6months" | "6meses" => Ok(Self::Months6),
            "1y" | "y1" | "year" | "1ano" | "ano" => Ok(Self::Year1),
            "3y" | "y3" | "3years" | "3anos" => Ok(Self::Years3),
            "5y" | "y5" | "5years" | "5anos" => Ok(Self::Years5),
            _ => Err(WindowError::Unrecognized(s.to_string())),
        }
    }
}
