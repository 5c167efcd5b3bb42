use crate::{
    mania::difficulty::key_usage::KeyUsage,
    util::{
        column_grid::ColumnGrid,
        search::search_left,
        smooth::{smooth, SmoothMode},
    },
};

/// Penalty for neighboring active columns that move in lockstep.
pub struct Adjacency;

impl Adjacency {
    const SMOOTH_WINDOW: f64 = 250.0;

    /// Evaluated on the anchor grid.
    pub fn compute(
        usage: &KeyUsage,
        deltas: &ColumnGrid<f64>,
        base: &[f64],
        anchor_corners: &[f64],
    ) -> Vec<f64> {
        let max_idx = base.len().saturating_sub(1);

        let steps: Vec<f64> = anchor_corners
            .iter()
            .map(|&corner| {
                let idx = search_left(base, corner).min(max_idx);

                usage.active_columns[idx]
                    .windows(2)
                    .fold(1.0, |step, pair| {
                        let (dk0, dk1) = (deltas.at(pair[0], idx), deltas.at(pair[1], idx));

                        step * Self::penalty(dk0, dk1)
                    })
            })
            .collect();

        smooth(anchor_corners, &steps, Self::SMOOTH_WINDOW, SmoothMode::Avg)
    }

    fn penalty(dk0: f64, dk1: f64) -> f64 {
        let max = dk0.max(dk1);
        let dks = (dk0 - dk1).abs() + 0.4 * f64::max(0.0, max - 0.11);

        if dks < 0.02 {
            f64::min(0.75 + 0.5 * max, 1.0)
        } else if dks < 0.07 {
            f64::min(0.65 + 5.0 * dks + 0.5 * max, 1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        mania::difficulty::{corners::Corners, object::NoteSequence, skills::jack::Jack},
        model::{RawNote, SpeedModifier},
    };

    use super::*;

    #[test]
    fn penalty_branches() {
        // identical fast jacks
        assert!((Adjacency::penalty(0.1, 0.1) - 0.8).abs() < 1e-12);
        // slightly apart
        assert!((Adjacency::penalty(0.1, 0.14) - (0.65 + 5.0 * 0.052 + 0.07)).abs() < 1e-12);
        // unrelated
        assert_eq!(Adjacency::penalty(0.1, 0.5), 1.0);
        // missing neighbors
        assert_eq!(Adjacency::penalty(Jack::NO_DELTA, Jack::NO_DELTA), 1.0);
    }

    #[test]
    fn lockstep_jacks_are_penalized() {
        let notes: Vec<_> = (0..20)
            .flat_map(|i| {
                let time = f64::from(i) * 100.0;

                [RawNote::tap(0, time), RawNote::tap(1, time)]
            })
            .collect();

        let seq = NoteSequence::new(&notes, 4, 8.0, SpeedModifier::Normal).unwrap();
        let corners = Corners::new(&seq);
        let usage = KeyUsage::new(&seq, &corners.base);
        let jack = Jack::compute(&seq, &corners.base);

        let values = Adjacency::compute(&usage, &jack.deltas, &corners.base, &corners.anchor);

        assert_eq!(values.len(), corners.anchor.len());
        assert!(values.iter().all(|&v| v > 0.0 && v <= 1.0));
        assert!(values.iter().any(|&v| v < 1.0));
    }
}
