use crate::util::{column_grid::ColumnGrid, float_ext::FloatExt};

/// Rewards balanced usage of multiple columns over a single dominant one.
pub struct Anchor;

impl Anchor {
    pub fn compute(usage_400: &ColumnGrid<f64>) -> Vec<f64> {
        let n_columns = usage_400.n_columns();
        let mut counts = Vec::with_capacity(n_columns);
        let mut anchor = Vec::with_capacity(usage_400.len());

        for i in 0..usage_400.len() {
            counts.clear();

            counts.extend(
                (0..n_columns)
                    .map(|column| usage_400.at(column, i))
                    .filter(|&count| count.not_eq(0.0)),
            );

            counts.sort_by(|a, b| b.total_cmp(a));

            anchor.push(Self::transform(Self::walk(&counts)));
        }

        anchor
    }

    /// Walk over descending column counts; `0` unless at least two columns
    /// are in use.
    fn walk(counts: &[f64]) -> f64 {
        if counts.len() < 2 {
            return 0.0;
        }

        let (walk, max_walk) = counts
            .windows(2)
            .fold((0.0, 0.0), |(walk, max_walk), pair| {
                let ratio = pair[1] / pair[0];

                (
                    walk + pair[0] * (1.0 - 4.0 * f64::powi(0.5 - ratio, 2)),
                    max_walk + pair[0],
                )
            });

        walk / max_walk
    }

    fn transform(anchor: f64) -> f64 {
        1.0 + f64::min(anchor - 0.18, 5.0 * f64::powi(anchor - 0.22, 3))
    }
}
