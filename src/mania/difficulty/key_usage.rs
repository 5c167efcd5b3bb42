use crate::util::{column_grid::ColumnGrid, search::search_left};

use super::object::NoteSequence;

/// Which columns are in use around each base corner.
pub struct KeyUsage {
    /// Ascending list of active columns for each base corner.
    pub active_columns: Box<[Vec<usize>]>,
    /// Graded occupancy with a quadratic falloff over 400ms around notes.
    pub usage_400: ColumnGrid<f64>,
}

impl KeyUsage {
    const ACTIVE_MARGIN: f64 = 150.0;
    const FALLOFF: f64 = 400.0;
    const BASE_USAGE: f64 = 3.75;

    pub fn new(seq: &NoteSequence, base: &[f64]) -> Self {
        Self {
            active_columns: Self::active_columns(seq, base),
            usage_400: Self::usage_400(seq, base),
        }
    }

    /// Whether `column` is active at the given base corner.
    pub fn is_active(&self, column: usize, idx: usize) -> bool {
        self.active_columns
            .get(idx)
            .is_some_and(|columns| columns.contains(&column))
    }

    fn active_columns(seq: &NoteSequence, base: &[f64]) -> Box<[Vec<usize>]> {
        let mut usage = ColumnGrid::new(seq.key_count, base.len(), false);

        for note in seq.notes.iter() {
            let start = (note.head - Self::ACTIVE_MARGIN).max(0.0);

            let end = match note.tail {
                Some(tail) => (tail + Self::ACTIVE_MARGIN).min(seq.end_time - 1.0),
                None => note.head + Self::ACTIVE_MARGIN,
            };

            let left = search_left(base, start);
            let right = search_left(base, end);

            if left < right {
                usage.column_mut(note.column)[left..right].fill(true);
            }
        }

        (0..base.len())
            .map(|i| {
                (0..seq.key_count)
                    .filter(|&column| usage.at(column, i))
                    .collect()
            })
            .collect()
    }

    fn usage_400(seq: &NoteSequence, base: &[f64]) -> ColumnGrid<f64> {
        let mut usage = ColumnGrid::new(seq.key_count, base.len(), 0.0);

        for note in seq.notes.iter() {
            let start = note.head.max(0.0);

            let end = match note.tail {
                Some(tail) => tail.min(seq.end_time - 1.0),
                None => note.head,
            };

            let left_400 = search_left(base, start - Self::FALLOFF);
            let left = search_left(base, start);
            let right = search_left(base, end);
            let right_400 = search_left(base, end + Self::FALLOFF);

            let column = usage.column_mut(note.column);
            let body = Self::BASE_USAGE + (end - start).min(1500.0) / 150.0;

            for value in column[left..right.max(left)].iter_mut() {
                *value += body;
            }

            for i in left_400..left {
                column[i] += Self::falloff(base[i] - start);
            }

            for i in right..right_400 {
                column[i] += Self::falloff(base[i] - end);
            }
        }

        usage
    }

    fn falloff(dist: f64) -> f64 {
        Self::BASE_USAGE - Self::BASE_USAGE / (Self::FALLOFF * Self::FALLOFF) * (dist * dist)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        mania::difficulty::corners::Corners,
        model::{RawNote, SpeedModifier},
    };

    use super::*;

    fn usage(notes: &[RawNote]) -> (Corners, KeyUsage) {
        let seq = NoteSequence::new(notes, 4, 8.0, SpeedModifier::Normal).unwrap();
        let corners = Corners::new(&seq);
        let usage = KeyUsage::new(&seq, &corners.base);

        (corners, usage)
    }

    #[test]
    fn tap_is_active_around_head() {
        let (corners, usage) = usage(&[RawNote::tap(1, 1000.0), RawNote::tap(2, 3000.0)]);

        for (i, &corner) in corners.base.iter().enumerate() {
            let expected = (850.0..1150.0).contains(&corner);
            assert_eq!(usage.is_active(1, i), expected, "corner {corner}");
            assert!(!usage.is_active(0, i));
        }
    }

    #[test]
    fn falloff_is_quadratic_and_symmetric() {
        assert_eq!(KeyUsage::falloff(0.0), 3.75);
        assert!(KeyUsage::falloff(400.0).abs() < 1e-12);
        assert_eq!(KeyUsage::falloff(-200.0), KeyUsage::falloff(200.0));
        assert!((KeyUsage::falloff(200.0) - 3.75 * 0.75).abs() < 1e-12);
    }

    #[test]
    fn usage_400_of_tap() {
        let (corners, usage) = usage(&[RawNote::tap(0, 1000.0)]);
        let column = usage.usage_400.column(0);

        for (&corner, &value) in corners.base.iter().zip(column) {
            let dist: f64 = corner - 1000.0;

            if dist.abs() < 400.0 {
                assert!((value - KeyUsage::falloff(dist)).abs() < 1e-12, "corner {corner}");
            } else {
                assert_eq!(value, 0.0, "corner {corner}");
            }
        }
    }

    #[test]
    fn usage_400_of_hold_body() {
        let (corners, usage) = usage(&[RawNote::hold(3, 1000.0, 2000.0)]);
        let idx = corners.base.iter().position(|&c| c == 1501.0).unwrap();

        let expected = 3.75 + 1000.0 / 150.0;
        assert!((usage.usage_400.at(3, idx) - expected).abs() < 1e-12);
    }
}
