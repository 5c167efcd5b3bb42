use crate::{model::Note, util::search::search_right};

/// Piecewise-constant density of hold note bodies.
///
/// The density rises shortly after a hold's head, settles down after
/// 120ms, and ends at the tail.
pub struct LnBodies {
    points: Box<[f64]>,
    cumsum: Box<[f64]>,
    values: Box<[f64]>,
}

impl LnBodies {
    pub fn new(holds: &[Note], end_time: f64) -> Self {
        let mut diffs = Vec::with_capacity(holds.len() * 3);

        for hold in holds {
            let Some(tail) = hold.tail else { continue };

            diffs.push(((hold.head + 60.0).min(tail), 1.3));
            diffs.push(((hold.head + 120.0).min(tail), -1.3 + 1.0));
            diffs.push((tail, -1.0));
        }

        // Stable so that equal times accumulate in insertion order
        diffs.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        let mut points: Vec<f64> = diffs.iter().map(|(time, _)| *time).collect();
        points.push(0.0);
        points.push(end_time);
        points.sort_by(f64::total_cmp);
        points.dedup();

        let mut values = Vec::with_capacity(points.len() - 1);
        let mut cumsum = Vec::with_capacity(points.len());
        cumsum.push(0.0);

        let mut diffs = diffs.into_iter().peekable();
        let mut curr = 0.0;

        for pair in points.windows(2) {
            while let Some((_, diff)) = diffs.next_if(|(time, _)| *time == pair[0]) {
                curr += diff;
            }

            let value = f64::min(curr, 2.5 + 0.5 * curr);
            values.push(value);
            cumsum.push(cumsum[cumsum.len() - 1] + (pair[1] - pair[0]) * value);
        }

        Self {
            points: points.into_boxed_slice(),
            cumsum: cumsum.into_boxed_slice(),
            values: values.into_boxed_slice(),
        }
    }

    /// Integral of the density over `[a, b]`.
    pub fn sum(&self, a: f64, b: f64) -> f64 {
        let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) else {
            return 0.0;
        };

        let a = a.clamp(first, last);
        let b = b.clamp(first, last);

        if b <= a || self.values.is_empty() {
            return 0.0;
        }

        let max_idx = self.values.len() - 1;
        let i = (search_right(&self.points, a) - 1).min(max_idx);
        let j = (search_right(&self.points, b) - 1).min(max_idx);

        if i == j {
            (b - a) * self.values[i]
        } else {
            (self.points[i + 1] - a) * self.values[i] + self.cumsum[j] - self.cumsum[i + 1]
                + (b - self.points[j]) * self.values[j]
        }
    }
}
