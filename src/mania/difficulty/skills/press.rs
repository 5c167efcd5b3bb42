use crate::{
    mania::difficulty::{ln_bodies::LnBodies, object::NoteSequence},
    util::{
        search::{search_left, search_right},
        smooth::{smooth, SmoothMode},
    },
};

/// Intensity of the overall press rate, regardless of columns.
pub struct Press;

impl Press {
    const SMOOTH_WINDOW: f64 = 500.0;
    const SMOOTH_SCALE: f64 = 0.001;

    pub fn compute(
        seq: &NoteSequence,
        ln_bodies: &LnBodies,
        anchor: &[f64],
        base: &[f64],
    ) -> Vec<f64> {
        let x = seq.hit_leniency;
        let mut steps = vec![0.0; base.len()];

        for pair in seq.notes.windows(2) {
            let (h_l, h_r) = (pair[0].head, pair[1].head);
            let delta_time = h_r - h_l;

            // * Chords only affect the corners right at their head
            if delta_time < 1e-9 {
                let left = search_left(base, h_l);
                let right = search_right(base, h_l);

                let spike = Self::chord_spike(x);

                for step in steps[left..right.max(left)].iter_mut() {
                    *step += spike;
                }

                continue;
            }

            let left = search_left(base, h_l);
            let right = search_left(base, h_r);

            if left >= right {
                continue;
            }

            let delta = 0.001 * delta_time;
            let v = 1.0 + 6.0 * 0.001 * ln_bodies.sum(h_l, h_r);
            let booster = Self::stream_booster(delta);

            let inner = if delta < 2.0 * x / 3.0 {
                f64::powi(delta - x / 2.0, 2)
            } else {
                f64::powi(x / 6.0, 2)
            };

            let inc = delta.recip()
                * f64::powf(0.08 / x * (1.0 - 24.0 / x * inner), 0.25)
                * booster.max(v);

            for (step, anchor) in steps[left..right].iter_mut().zip(&anchor[left..right]) {
                *step += f64::min(inc * anchor, f64::max(inc, inc * 2.0 - 10.0));
            }
        }

        smooth(
            base,
            &steps,
            Self::SMOOTH_WINDOW,
            SmoothMode::Sum(Self::SMOOTH_SCALE),
        )
    }

    fn chord_spike(x: f64) -> f64 {
        1000.0 * f64::powf(0.02 * (4.0 / x - 24.0), 0.25)
    }

    /// Bonus for streams between 160 and 360 notes per 7.5 seconds.
    fn stream_booster(delta: f64) -> f64 {
        let nps = 7.5 / delta;

        if 160.0 < nps && nps < 360.0 {
            1.0 + 1.7e-7 * (nps - 160.0) * f64::powi(nps - 360.0, 2)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        mania::difficulty::{corners::Corners, key_usage::KeyUsage, skills::anchor::Anchor},
        model::{RawNote, SpeedModifier},
    };

    use super::*;

    fn press(notes: &[RawNote]) -> (Corners, Vec<f64>) {
        let seq = NoteSequence::new(notes, 4, 8.0, SpeedModifier::Normal).unwrap();
        let corners = Corners::new(&seq);
        let usage = KeyUsage::new(&seq, &corners.base);
        let anchor = Anchor::compute(&usage.usage_400);
        let ln_bodies = LnBodies::new(&seq.holds, seq.end_time);
        let press = Press::compute(&seq, &ln_bodies, &anchor, &corners.base);

        (corners, press)
    }

    #[test]
    fn booster_range() {
        assert_eq!(Press::stream_booster(7.5 / 160.0), 1.0);
        assert_eq!(Press::stream_booster(7.5 / 360.0), 1.0);
        assert_eq!(Press::stream_booster(1.0), 1.0);
        assert!(Press::stream_booster(7.5 / 200.0) > 1.0);
    }

    #[test]
    fn chord_spike_is_positive() {
        for od in [0.0, 5.0, 8.0, 10.0] {
            let x = crate::mania::difficulty::object::hit_leniency(od);
            let spike = Press::chord_spike(x);

            assert!(spike.is_finite() && spike > 0.0, "od {od}");
        }
    }

    #[test]
    fn denser_streams_press_harder() {
        let stream = |spacing: f64| -> Vec<RawNote> {
            (0..40)
                .map(|i| RawNote::tap(i % 4, 100.0 + f64::from(i as u32) * spacing))
                .collect()
        };

        let peak = |values: Vec<f64>| values.into_iter().fold(0.0, f64::max);

        let slow = peak(press(&stream(200.0)).1);
        let fast = peak(press(&stream(100.0)).1);

        assert!(slow > 0.0);
        assert!(fast > slow);
    }

    #[test]
    fn chords_add_spikes() {
        let (corners, values) = press(&[RawNote::tap(0, 1000.0), RawNote::tap(1, 1000.0)]);

        assert_eq!(values.len(), corners.base.len());
        assert!(values.iter().any(|&v| v > 0.0));
    }
}
