use crate::util::{difficulty::weighted_power_mean, search::search_left};

/// Skill curves interpolated onto the union grid.
pub struct SkillCurves {
    pub jack: Vec<f64>,
    pub cross: Vec<f64>,
    pub press: Vec<f64>,
    pub adjacency: Vec<f64>,
    pub release: Vec<f64>,
    pub counts: Vec<f64>,
    pub key_counts: Vec<usize>,
}

impl SkillCurves {
    /// The difficulty at each corner.
    pub fn difficulty(&self) -> Vec<f64> {
        (0..self.jack.len())
            .map(|i| {
                let a = self.adjacency[i];
                let j = self.jack[i];
                let ks = self.key_counts[i] as f64;

                let a_ks = f64::powf(a, 3.0 / ks);

                let term1 = a_ks * j.min(8.0 + 0.85 * j);
                let term2 = f64::powf(a, 2.0 / 3.0)
                    * (0.8 * self.press[i] + self.release[i] * 35.0 / (self.counts[i] + 8.0));

                let s = f64::powf(
                    0.4 * f64::powf(term1, 1.5) + 0.6 * f64::powf(term2, 1.5),
                    2.0 / 3.0,
                );

                let x = self.cross[i];
                let t = (a_ks * x) / (x + s + 1.0);

                2.7 * s.sqrt() * f64::powf(t, 1.5) + s * 0.27
            })
            .collect()
    }
}

const UPPER_PERCENTILES: &[f64] = &[0.945, 0.935, 0.925, 0.915];
const LOWER_PERCENTILES: &[f64] = &[0.845, 0.835, 0.825, 0.815];

/// Reduce the difficulty curve to a single value.
///
/// Each corner is weighted by its note count times the width of the grid
/// around it.
pub fn aggregate(corners: &[f64], difficulty: &[f64], counts: &[f64]) -> f64 {
    let weights: Vec<f64> = gaps(corners)
        .zip(counts)
        .map(|(gap, count)| count * gap)
        .collect();

    let mut sorted: Vec<(f64, f64)> = difficulty
        .iter()
        .copied()
        .zip(weights.iter().copied())
        .collect();
    sorted.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    let mut cumulative = Vec::with_capacity(sorted.len());
    let mut acc = 0.0;

    for (_, weight) in sorted.iter() {
        acc += weight;
        cumulative.push(acc);
    }

    for value in cumulative.iter_mut() {
        *value /= acc;
    }

    let max_idx = sorted.len().saturating_sub(1);

    let percentile = |targets: &[f64]| {
        let sum: f64 = targets
            .iter()
            .map(|&target| sorted[search_left(&cumulative, target).min(max_idx)].0)
            .sum();

        sum / targets.len() as f64
    };

    let percentile_93 = percentile(UPPER_PERCENTILES);
    let percentile_83 = percentile(LOWER_PERCENTILES);

    let weighted_mean = weighted_power_mean(difficulty.iter().copied().zip(weights), 5.0);

    0.88 * percentile_93 * 0.25 + 0.94 * percentile_83 * 0.2 + weighted_mean * 0.55
}

/// Half the distance between each corner's neighbors.
fn gaps(corners: &[f64]) -> impl Iterator<Item = f64> + '_ {
    let n = corners.len();

    (0..n).map(move |i| match i {
        _ if n < 2 => 0.0,
        0 => (corners[1] - corners[0]) / 2.0,
        _ if i == n - 1 => (corners[n - 1] - corners[n - 2]) / 2.0,
        _ => (corners[i + 1] - corners[i - 1]) / 2.0,
    })
}
