//! Benchmark inputs for pacsize.

use pacsize_lib::{Modality, Row};

/// Builds `count` rows cycling through every modality.
///
/// Device counts, volumes and sizes vary per row so no two consecutive rows
/// are identical.
#[must_use]
pub fn synthetic_rows(count: usize) -> Vec<Row> {
    let modalities = Modality::all();
    (0..count)
        .map(|i| {
            let n = u32::try_from(i % 1000).unwrap_or(0);
            Row::new(
                modalities[i % modalities.len()],
                1 + n % 4,
                10 + n % 90,
                f64::from(15 + (n * 37) % 985),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_rows() {
        let rows = synthetic_rows(20);

        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0], Row::new(Modality::Cr, 1, 10, 15.0));
        assert_eq!(rows[9].modality, Modality::Cr);
        assert!(rows.iter().all(|row| row.validate().is_ok()));
    }
}
