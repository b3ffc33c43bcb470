//! Imaging modality codes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Imaging equipment type.
///
/// The set is closed. [`Modality::Unselected`] is the empty sentinel a new
/// row starts with and serializes as `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Modality {
    /// No modality chosen yet.
    #[default]
    #[serde(rename = "")]
    Unselected,
    /// Computed radiography.
    #[serde(rename = "CR")]
    Cr,
    /// Computed tomography.
    #[serde(rename = "CT")]
    Ct,
    /// Digital radiography.
    #[serde(rename = "DX")]
    Dx,
    /// Mammography.
    #[serde(rename = "MG")]
    Mg,
    /// Magnetic resonance.
    #[serde(rename = "MR")]
    Mr,
    /// Nuclear medicine.
    #[serde(rename = "NM")]
    Nm,
    /// Ultrasound.
    #[serde(rename = "US")]
    Us,
    /// X-ray angiography.
    #[serde(rename = "XA")]
    Xa,
    /// Echocardiography.
    #[serde(rename = "ECO")]
    Eco,
}

impl Modality {
    /// Label shown for the unselected sentinel.
    pub const PLACEHOLDER: &'static str = "Selecione";

    /// Returns the modality code, or `""` when unselected.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unselected => "",
            Self::Cr => "CR",
            Self::Ct => "CT",
            Self::Dx => "DX",
            Self::Mg => "MG",
            Self::Mr => "MR",
            Self::Nm => "NM",
            Self::Us => "US",
            Self::Xa => "XA",
            Self::Eco => "ECO",
        }
    }

    /// Returns the code, or the placeholder label when unselected.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unselected => Self::PLACEHOLDER,
            _ => self.as_str(),
        }
    }

    /// Returns true if no modality has been chosen.
    #[must_use]
    pub const fn is_unselected(&self) -> bool {
        matches!(self, Self::Unselected)
    }

    /// Returns every selectable modality, in display order.
    ///
    /// The unselected sentinel is not included.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Cr,
            Self::Ct,
            Self::Dx,
            Self::Mg,
            Self::Mr,
            Self::Nm,
            Self::Us,
            Self::Xa,
            Self::Eco,
        ]
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Modality {
    type Err = ModalityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Ok(Self::Unselected);
        }
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| ModalityParseError(s.to_string()))
    }
}

/// Error returned when parsing a modality code outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalityParseError(String);

impl std::fmt::Display for ModalityParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid modality '{}', expected one of: CR, CT, DX, MG, MR, NM, US, XA, ECO",
            self.0
        )
    }
}

impl std::error::Error for ModalityParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modality_parse() {
        assert_eq!("CT".parse::<Modality>().unwrap(), Modality::Ct);
        assert_eq!("eco".parse::<Modality>().unwrap(), Modality::Eco);
        assert_eq!(" mr ".parse::<Modality>().unwrap(), Modality::Mr);
        assert_eq!("".parse::<Modality>().unwrap(), Modality::Unselected);
        assert!("PET".parse::<Modality>().is_err());
    }

    #[test]
    fn test_modality_labels() {
        assert_eq!(Modality::Unselected.as_str(), "");
        assert_eq!(Modality::Unselected.label(), "Selecione");
        assert_eq!(Modality::Xa.label(), "XA");
        assert_eq!(Modality::all().len(), 9);
        assert!(!Modality::all().contains(&Modality::Unselected));
    }

    #[test]
    fn test_modality_serde() {
        assert_eq!(serde_json::to_string(&Modality::Ct).unwrap(), "\"CT\"");
        assert_eq!(serde_json::to_string(&Modality::Unselected).unwrap(), "\"\"");
        let parsed: Modality = serde_json::from_str("\"ECO\"").unwrap();
        assert_eq!(parsed, Modality::Eco);
    }
}
