use crate::{
    mania::difficulty::{key_usage::KeyUsage, object::NoteSequence},
    model::Note,
    util::{
        search::search_left,
        smooth::{smooth, SmoothMode},
    },
};

/// Coupling coefficients of the gaps between columns, indexed by key count.
///
/// Row `k` holds `k + 1` entries: the gap in front of the first column, the
/// gaps between adjacent columns, and the gap behind the last column.
const CROSS_MATRIX: [&[f64]; 11] = [
    &[-1.0],
    &[0.075, 0.075],
    &[0.125, 0.05, 0.125],
    &[0.125, 0.125, 0.125, 0.125],
    &[0.175, 0.25, 0.05, 0.25, 0.175],
    &[0.175, 0.25, 0.175, 0.175, 0.25, 0.175],
    &[0.225, 0.35, 0.25, 0.05, 0.25, 0.35, 0.225],
    &[0.225, 0.35, 0.25, 0.225, 0.225, 0.25, 0.35, 0.225],
    &[0.275, 0.45, 0.35, 0.25, 0.05, 0.25, 0.35, 0.45, 0.275],
    &[0.275, 0.45, 0.35, 0.25, 0.275, 0.275, 0.25, 0.35, 0.45, 0.275],
    &[0.325, 0.55, 0.45, 0.35, 0.25, 0.05, 0.25, 0.35, 0.45, 0.55, 0.325],
];

/// Intensity of alternating between neighboring columns.
pub struct Cross;

impl Cross {
    const SMOOTH_WINDOW: f64 = 500.0;
    const SMOOTH_SCALE: f64 = 0.001;

    pub fn compute(seq: &NoteSequence, usage: &KeyUsage, base: &[f64]) -> Vec<f64> {
        let key_count = seq.key_count;
        let x = seq.hit_leniency;
        let coeffs = CROSS_MATRIX[key_count];
        let n_gaps = key_count + 1;

        let mut gap_values = vec![vec![0.0; base.len()]; n_gaps];
        let mut fast_cross = vec![vec![0.0; base.len()]; n_gaps];

        for (gap, coeff) in coeffs.iter().enumerate() {
            let heads = Self::gap_heads(seq, gap);

            for pair in heads.windows(2) {
                let (start, end) = (pair[0], pair[1]);
                let left = search_left(base, start);
                let right = search_left(base, end);

                if left >= right {
                    continue;
                }

                let delta = 0.001 * (end - start);
                let mut value = 0.16 * f64::powi(x.max(delta), -2);

                let inactive = |column: Option<usize>| {
                    column.map_or(true, |column| {
                        !usage.is_active(column, left) && !usage.is_active(column, right)
                    })
                };

                if inactive(gap.checked_sub(1)) || inactive(Some(gap)) {
                    value *= 1.0 - coeff;
                }

                gap_values[gap][left..right].fill(value);

                let fast = 0.4 * f64::powi(delta.max(0.06).max(0.75 * x), -2) - 80.0;
                fast_cross[gap][left..right].fill(fast.max(0.0));
            }
        }

        let x_base: Vec<f64> = (0..base.len())
            .map(|i| {
                let direct: f64 = gap_values
                    .iter()
                    .zip(coeffs)
                    .map(|(values, coeff)| values[i] * coeff)
                    .sum();

                let between: f64 = (0..key_count)
                    .map(|gap| {
                        f64::sqrt(
                            fast_cross[gap][i]
                                * coeffs[gap]
                                * fast_cross[gap + 1][i]
                                * coeffs[gap + 1],
                        )
                    })
                    .sum();

                direct + between
            })
            .collect();

        smooth(
            base,
            &x_base,
            Self::SMOOTH_WINDOW,
            SmoothMode::Sum(Self::SMOOTH_SCALE),
        )
    }

    /// Head times of the notes bordering a gap, in order.
    ///
    /// The outer gaps only see their single neighboring column.
    fn gap_heads(seq: &NoteSequence, gap: usize) -> Vec<f64> {
        fn heads(notes: &[Note]) -> Vec<f64> {
            notes.iter().map(|note| note.head).collect()
        }

        if gap == 0 {
            return heads(&seq.by_column[0]);
        } else if gap == seq.key_count {
            return heads(&seq.by_column[gap - 1]);
        }

        let (left, right) = (&seq.by_column[gap - 1], &seq.by_column[gap]);
        let mut merged = Vec::with_capacity(left.len() + right.len());
        let (mut i, mut j) = (0, 0);

        // Ties take the left column first
        while i < left.len() && j < right.len() {
            if right[j].head < left[i].head {
                merged.push(right[j].head);
                j += 1;
            } else {
                merged.push(left[i].head);
                i += 1;
            }
        }

        merged.extend(left[i..].iter().map(|note| note.head));
        merged.extend(right[j..].iter().map(|note| note.head));

        merged
    }
}
