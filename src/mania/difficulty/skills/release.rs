use crate::{
    mania::difficulty::object::NoteSequence,
    util::{
        difficulty::sigmoid_blend,
        search::search_left,
        smooth::{smooth, SmoothMode},
    },
};

/// Intensity of releasing hold notes.
pub struct Release;

impl Release {
    const SMOOTH_WINDOW: f64 = 500.0;
    const SMOOTH_SCALE: f64 = 0.001;

    pub fn compute(seq: &NoteSequence, base: &[f64]) -> Vec<f64> {
        let x = seq.hit_leniency;

        let indices: Vec<f64> = seq
            .tails
            .iter()
            .map(|note| {
                let tail = note.end();
                let next_head = seq.next_head_in_column(note);

                let head_idx = 0.001 * (tail - note.head - 80.0).abs() / x;
                let tail_idx = 0.001 * (next_head - tail - 80.0).abs() / x;

                sigmoid_blend(head_idx, tail_idx, 0.75, 5.0)
            })
            .collect();

        let mut steps = vec![0.0; base.len()];

        for (pair, idx_pair) in seq.tails.windows(2).zip(indices.windows(2)) {
            let (start, end) = (pair[0].end(), pair[1].end());
            let left = search_left(base, start);
            let right = search_left(base, end);

            if left >= right {
                continue;
            }

            let delta_r = 0.001 * (end - start);
            let value = 0.08 * delta_r.sqrt().recip() / x * (1.0 + 0.8 * (idx_pair[0] + idx_pair[1]));

            steps[left..right].fill(value);
        }

        smooth(
            base,
            &steps,
            Self::SMOOTH_WINDOW,
            SmoothMode::Sum(Self::SMOOTH_SCALE),
        )
    }
}
