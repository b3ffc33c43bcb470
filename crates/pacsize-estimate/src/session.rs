//! Mutable estimator session.
//!
//! A [`Session`] owns the input state and the estimate derived from it. Each
//! mutating call builds the next row list, commits it, and recomputes the
//! estimate before returning, so [`Session::estimate`] always reflects the
//! latest committed input.

use pacsize_types::{InputError, Modality, PacsizeError, Row, RowField, Window, WindowError};
use tracing::{debug, warn};

use crate::calculator::{Estimate, derive};
use crate::scenario::EstimatorState;

/// Row table plus window, with an always-current estimate.
#[derive(Debug, Clone)]
pub struct Session {
    state: EstimatorState,
    estimate: Estimate,
    revision: u64,
}

impl Session {
    /// Creates a session from an existing state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state has no rows or a row is malformed.
    pub fn new(state: EstimatorState) -> Result<Self, PacsizeError> {
        state.validate()?;
        Ok(Self::from_valid(state))
    }

    /// Creates a session with the three example rows over one year.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_valid(EstimatorState::seed())
    }

    fn from_valid(state: EstimatorState) -> Self {
        let estimate = derive(&state.rows, state.window);
        Self {
            state,
            estimate,
            revision: 0,
        }
    }

    /// Returns the current input state.
    #[must_use]
    pub const fn state(&self) -> &EstimatorState {
        &self.state
    }

    /// Returns the rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.state.rows
    }

    /// Returns the current window.
    #[must_use]
    pub const fn window(&self) -> Window {
        self.state.window
    }

    /// Returns the estimate for the current state.
    #[must_use]
    pub const fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    /// Returns the number of committed mutations.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.rows.len()
    }

    /// Always false: a session keeps at least one row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.rows.is_empty()
    }

    /// Returns true if a row may be removed, i.e. more than one remains.
    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.state.rows.len() > 1
    }

    /// Appends a blank row and returns its index.
    pub fn add_row(&mut self) -> usize {
        let mut rows = self.state.rows.clone();
        rows.push(Row::blank());
        let index = rows.len() - 1;
        self.commit(rows, self.state.window);
        index
    }

    /// Replaces one field of the row at `index` with a parsed value.
    ///
    /// Numeric fields accept non-negative integers only; the modality accepts
    /// a code from the closed set or an empty string.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the index is out of range or the value
    /// does not parse. The session is left unchanged.
    pub fn update_field(
        &mut self,
        index: usize,
        field: RowField,
        value: &str,
    ) -> Result<(), InputError> {
        let updated = self
            .state
            .rows
            .get(index)
            .ok_or(InputError::RowOutOfRange {
                index,
                len: self.state.rows.len(),
            })
            .and_then(|row| apply_field(*row, field, value))
            .inspect_err(|e| warn!(index, %field, value, error = %e, "rejected row edit"))?;

        let mut rows = self.state.rows.clone();
        rows[index] = updated;
        self.commit(rows, self.state.window);
        Ok(())
    }

    /// Removes the row at `index`.
    ///
    /// Returns false without changing anything when only one row remains or
    /// the index is out of range.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.state.rows.len() {
            debug!(index, rows = self.state.rows.len(), "row removal skipped");
            return false;
        }

        let rows = self
            .state
            .rows
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, row)| *row)
            .collect();
        self.commit(rows, self.state.window);
        true
    }

    /// Sets the projection window.
    pub fn set_window(&mut self, window: Window) {
        self.commit(self.state.rows.clone(), window);
    }

    /// Sets the projection window from a day count.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::NotAPreset`] if `days` is not one of the presets.
    /// The session is left unchanged.
    pub fn set_window_days(&mut self, days: u32) -> Result<(), WindowError> {
        let window = Window::try_from(days)
            .inspect_err(|e| warn!(days, error = %e, "rejected window"))?;
        self.set_window(window);
        Ok(())
    }

    /// Installs the next state and recomputes the estimate in the same step.
    fn commit(&mut self, rows: Vec<Row>, window: Window) {
        self.state = EstimatorState::new(rows, window);
        self.estimate = derive(&self.state.rows, self.state.window);
        self.revision += 1;
        debug!(
            revision = self.revision,
            rows = self.state.rows.len(),
            window_days = window.days(),
            total_gb = self.estimate.total_gb,
            tier = %self.estimate.tier,
            "estimate recomputed"
        );
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Returns `row` with `field` replaced by the parsed `value`.
fn apply_field(mut row: Row, field: RowField, value: &str) -> Result<Row, InputError> {
    match field {
        RowField::Modality => {
            row.modality = value
                .parse::<Modality>()
                .map_err(|_| InputError::UnknownModality(value.to_string()))?;
        }
        RowField::Devices => row.devices = parse_count(value)?,
        RowField::StudiesPerDay => row.studies_per_day = parse_count(value)?,
        RowField::StudySizeMb => row.study_size_mb = f64::from(parse_count(value)?),
    }
    Ok(row)
}

fn parse_count(value: &str) -> Result<u32, InputError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| InputError::NotANumber {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pacsize_types::Tier;

    #[test]
    fn test_seeded_session() {
        let session = Session::seeded();

        assert_eq!(session.len(), 3);
        assert_eq!(session.window(), Window::Year1);
        assert_eq!(session.revision(), 0);
        assert_relative_eq!(session.estimate().total_gb, 13114.45, epsilon = 1e-9);
        assert_eq!(session.estimate().tier, Tier::Standard);
    }

    #[test]
    fn test_new_rejects_empty_state() {
        let state = EstimatorState::new(Vec::new(), Window::Year1);
        assert!(matches!(
            Session::new(state),
            Err(PacsizeError::EmptyScenario)
        ));
    }

    #[test]
    fn test_add_row_appends_blank() {
        let mut session = Session::seeded();
        let before = session.rows().to_vec();

        let index = session.add_row();

        assert_eq!(index, 3);
        assert_eq!(session.len(), 4);
        assert_eq!(&session.rows()[..3], before.as_slice());
        assert_eq!(session.rows()[3], Row::new(Modality::Unselected, 1, 0, 0.0));
        assert_eq!(session.estimate().per_row_gb.len(), 4);
        assert_eq!(session.revision(), 1);
    }

    #[test]
    fn test_update_field_recomputes() {
        let mut session = Session::seeded();

        session
            .update_field(1, RowField::Devices, "2")
            .unwrap();

        assert_eq!(session.rows()[1].devices, 2);
        // CT contributes 11388 GB per device over a year.
        assert_relative_eq!(
            session.estimate().total_gb,
            13114.45 + 11388.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_update_each_field() {
        let mut session = Session::seeded();
        let index = session.add_row();

        session.update_field(index, RowField::Modality, "us").unwrap();
        session.update_field(index, RowField::StudiesPerDay, " 25 ").unwrap();
        session.update_field(index, RowField::StudySizeMb, "30").unwrap();
        session.update_field(index, RowField::Devices, "3").unwrap();

        assert_eq!(session.rows()[index], Row::new(Modality::Us, 3, 25, 30.0));

        session.update_field(index, RowField::Modality, "").unwrap();
        assert_eq!(session.rows()[index].modality, Modality::Unselected);
    }

    #[test]
    fn test_malformed_input_keeps_previous_value() {
        let mut session = Session::seeded();
        let state = session.state().clone();
        let estimate = session.estimate().clone();

        for bad in ["", "abc", "-3", "1.5", "99999999999"] {
            let result = session.update_field(0, RowField::StudiesPerDay, bad);
            assert!(
                matches!(result, Err(InputError::NotANumber { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!(matches!(
            session.update_field(0, RowField::Modality, "PET"),
            Err(InputError::UnknownModality(_))
        ));

        assert_eq!(session.state(), &state);
        assert_eq!(session.estimate(), &estimate);
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn test_update_out_of_range() {
        let mut session = Session::seeded();
        assert_eq!(
            session.update_field(7, RowField::Devices, "1"),
            Err(InputError::RowOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_remove_last_row_is_noop() {
        let mut session = Session::new(EstimatorState::new(
            vec![Row::new(Modality::Ct, 1, 52, 600.0)],
            Window::Year1,
        ))
        .unwrap();

        assert!(!session.can_remove());
        assert!(!session.remove_row(0));
        assert_eq!(session.len(), 1);
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut session = Session::seeded();

        assert!(session.remove_row(1));

        assert_eq!(session.len(), 2);
        assert_eq!(session.rows()[0].modality, Modality::Cr);
        assert_eq!(session.rows()[1].modality, Modality::Mr);
        assert_relative_eq!(
            session.estimate().total_gb,
            448.95 + 1277.5,
            epsilon = 1e-9
        );

        assert!(session.remove_row(0));
        assert_eq!(session.rows(), &[Row::new(Modality::Mr, 1, 14, 250.0)]);
        assert!(!session.remove_row(0));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut session = Session::seeded();
        assert!(!session.remove_row(3));
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_set_window_days() {
        let mut session = Session::seeded();

        session.set_window_days(31).unwrap();
        assert_eq!(session.window(), Window::Month1);
        assert_eq!(session.estimate().window_days, 31);
        assert_relative_eq!(session.estimate().total_gb, 1113.83, epsilon = 1e-9);

        assert_eq!(
            session.set_window_days(240),
            Err(WindowError::NotAPreset(240))
        );
        assert_eq!(session.window(), Window::Month1);
    }

    #[test]
    fn test_estimate_tracks_every_mutation() {
        let mut session = Session::seeded();

        session.set_window(Window::Day1);
        session.add_row();
        session.update_field(3, RowField::StudiesPerDay, "10").unwrap();
        session.update_field(3, RowField::StudySizeMb, "100").unwrap();
        session.remove_row(0);

        assert_eq!(
            session.estimate(),
            &derive(session.rows(), session.window())
        );
        assert_eq!(session.revision(), 5);
    }
}
