//! Input rows and the recommendation tier.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::InputError;
use crate::modality::Modality;

/// One equipment class being measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Equipment type.
    #[serde(default)]
    pub modality: Modality,
    /// Number of machines of this modality.
    pub devices: u32,
    /// Studies produced per device per day.
    pub studies_per_day: u32,
    /// Average size of one study in megabytes.
    pub study_size_mb: f64,
}

impl Row {
    /// Creates a new row.
    #[must_use]
    pub const fn new(
        modality: Modality,
        devices: u32,
        studies_per_day: u32,
        study_size_mb: f64,
    ) -> Self {
        Self {
            modality,
            devices,
            studies_per_day,
            study_size_mb,
        }
    }

    /// Creates the blank row appended by "add row".
    #[must_use]
    pub const fn blank() -> Self {
        Self::new(Modality::Unselected, 1, 0, 0.0)
    }

    /// Checks that the study size is a finite, non-negative number.
    ///
    /// The integer fields cannot be negative by construction.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidStudySize`] otherwise.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.study_size_mb.is_finite() && self.study_size_mb >= 0.0 {
            Ok(())
        } else {
            Err(InputError::InvalidStudySize(self.study_size_mb))
        }
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::blank()
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x{} {}/dia {} MB",
            self.modality.label(),
            self.devices,
            self.studies_per_day,
            self.study_size_mb
        )
    }
}

/// Editable column of a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    /// The modality code.
    Modality,
    /// Device count.
    Devices,
    /// Studies per device per day.
    StudiesPerDay,
    /// Study size in megabytes.
    StudySizeMb,
}

impl RowField {
    /// Returns the column header.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Modality => "Modalidade",
            Self::Devices => "Qtd. aparelhos",
            Self::StudiesPerDay => "Número de estudos por dia",
            Self::StudySizeMb => "Tamanho do estudo (MB)",
        }
    }

    /// Returns true for the integer-valued columns.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Modality)
    }

    /// Returns all fields in column order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Modality,
            Self::Devices,
            Self::StudiesPerDay,
            Self::StudySizeMb,
        ]
    }
}

impl std::fmt::Display for RowField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RowField {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modality" | "modalidade" | "mod" => Ok(Self::Modality),
            "devices" | "aparelhos" | "dev" => Ok(Self::Devices),
            "studies" | "studies_per_day" | "estudos" => Ok(Self::StudiesPerDay),
            "size" | "study_size_mb" | "mb" | "tamanho" => Ok(Self::StudySizeMb),
            _ => Err(InputError::UnknownField(s.to_string())),
        }
    }
}

/// Equipment tier recommended from the annualized size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Small unit.
    Lite,
    /// Standard large unit.
    Standard,
}

impl Tier {
    /// Returns the recommendation text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lite => "Pequena (Lite)",
            Self::Standard => "Unidade Grande (Padrão)",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_row() {
        let row = Row::default();
        assert_eq!(row.modality, Modality::Unselected);
        assert_eq!(row.devices, 1);
        assert_eq!(row.studies_per_day, 0);
        assert_eq!(row.study_size_mb, 0.0);
    }

    #[test]
    fn test_row_validate() {
        assert!(Row::new(Modality::Ct, 1, 52, 600.0).validate().is_ok());
        assert!(Row::new(Modality::Ct, 1, 52, -1.0).validate().is_err());
        assert!(Row::new(Modality::Ct, 1, 52, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_row_deserialize_without_modality() {
        let row: Row =
            serde_json::from_str(r#"{"devices":2,"studies_per_day":10,"study_size_mb":40}"#)
                .unwrap();
        assert_eq!(row, Row::new(Modality::Unselected, 2, 10, 40.0));
    }

    #[test]
    fn test_row_field_parse() {
        assert_eq!("devices".parse::<RowField>().unwrap(), RowField::Devices);
        assert_eq!("Estudos".parse::<RowField>().unwrap(), RowField::StudiesPerDay);
        assert_eq!("mb".parse::<RowField>().unwrap(), RowField::StudySizeMb);
        assert!("colour".parse::<RowField>().is_err());
        assert!(!RowField::Modality.is_numeric());
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(Tier::Lite.label(), "Pequena (Lite)");
        assert_eq!(Tier::Standard.to_string(), "Unidade Grande (Padrão)");
    }
}
