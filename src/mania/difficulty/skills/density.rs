use crate::{mania::difficulty::key_usage::KeyUsage, util::search::search_left};

/// Note count and amount of active columns around each base corner.
pub struct Density {
    /// Heads within 500ms of each base corner.
    pub counts: Vec<f64>,
    /// Active columns at each base corner, at least `1`.
    pub key_counts: Vec<usize>,
}

impl Density {
    const WINDOW: f64 = 500.0;

    pub fn compute(heads: &[f64], usage: &KeyUsage, base: &[f64]) -> Self {
        let counts = base
            .iter()
            .map(|&corner| {
                let low = search_left(heads, corner - Self::WINDOW);
                let high = search_left(heads, corner + Self::WINDOW);

                (high - low) as f64
            })
            .collect();

        let key_counts = usage
            .active_columns
            .iter()
            .map(|columns| columns.len().max(1))
            .collect();

        Self { counts, key_counts }
    }
}
