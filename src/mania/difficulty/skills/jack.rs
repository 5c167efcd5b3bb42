use crate::{
    mania::difficulty::object::NoteSequence,
    util::{
        column_grid::ColumnGrid,
        search::search_left,
        smooth::{smooth, SmoothMode},
    },
};

/// Intensity of repeated notes within the same column.
pub struct Jack {
    /// Combined intensity over all columns on the base grid.
    pub jbar: Vec<f64>,
    /// Seconds between the surrounding notes of each column at each base
    /// corner, [`Jack::NO_DELTA`] where a column has no surrounding pair.
    pub deltas: ColumnGrid<f64>,
}

impl Jack {
    pub const NO_DELTA: f64 = 1e9;

    const SMOOTH_WINDOW: f64 = 500.0;
    const SMOOTH_SCALE: f64 = 0.001;

    pub fn compute(seq: &NoteSequence, base: &[f64]) -> Self {
        let x = seq.hit_leniency;
        let len = base.len();

        let mut values = ColumnGrid::new(seq.key_count, len, 0.0);
        let mut deltas = ColumnGrid::new(seq.key_count, len, Self::NO_DELTA);

        for (column, notes) in seq.by_column.iter().enumerate() {
            for pair in notes.windows(2) {
                let (start, end) = (pair[0].head, pair[1].head);
                let left = search_left(base, start);
                let right = search_left(base, end);

                if left >= right {
                    continue;
                }

                let delta = 0.001 * (end - start);
                let value = Self::value(delta, x) * Self::jack_nerfer(delta);

                values.column_mut(column)[left..right].fill(value);
                deltas.column_mut(column)[left..right].fill(delta);
            }
        }

        let smoothed: Vec<Vec<f64>> = (0..seq.key_count)
            .map(|column| {
                smooth(
                    base,
                    values.column(column),
                    Self::SMOOTH_WINDOW,
                    SmoothMode::Sum(Self::SMOOTH_SCALE),
                )
            })
            .collect();

        let jbar = (0..len)
            .map(|i| {
                let (num, den) = smoothed.iter().enumerate().fold(
                    (0.0, 0.0),
                    |(num, den), (column, column_values)| {
                        let weight = deltas.at(column, i).recip();

                        (
                            num + f64::powi(column_values[i].max(0.0), 5) * weight,
                            den + weight,
                        )
                    },
                );

                f64::powf(num / f64::max(1e-9, den), 1.0 / 5.0)
            })
            .collect();

        Self { jbar, deltas }
    }

    fn value(delta: f64, x: f64) -> f64 {
        delta.recip() * (delta + 0.11 * f64::powf(x, 0.25)).recip()
    }

    /// Suppresses intervals around 80ms.
    fn jack_nerfer(delta: f64) -> f64 {
        1.0 - 7e-5 * f64::powi(0.15 + (delta - 0.08).abs(), -4)
    }
}
