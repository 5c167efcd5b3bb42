use super::search::search_right;

/// Linear interpolation of `(old_x, old_values)` onto `new_x`.
///
/// Values outside of `old_x`'s domain are clamped to the first and last
/// value respectively.
pub fn interp_linear(new_x: &[f64], old_x: &[f64], old_values: &[f64]) -> Vec<f64> {
    debug_assert_eq!(old_x.len(), old_values.len());

    let (Some(&first), Some(&last)) = (old_x.first(), old_x.last()) else {
        return vec![0.0; new_x.len()];
    };

    let n = old_x.len();

    new_x
        .iter()
        .map(|&x| {
            if x <= first {
                return old_values[0];
            } else if x >= last {
                return old_values[n - 1];
            }

            // `first < x < last` so `1 <= j < n`
            let j = search_right(old_x, x);
            let (x0, x1) = (old_x[j - 1], old_x[j]);
            let (y0, y1) = (old_values[j - 1], old_values[j]);

            y0 + (y1 - y0) * (x - x0) / (x1 - x0)
        })
        .collect()
}

/// Zero-order hold of `(old_x, old_values)` onto `new_x`.
///
/// Each new point takes the last old value at or before it, clamped to the
/// first value for points in front of the domain.
pub fn interp_step<T: Copy + Default>(new_x: &[f64], old_x: &[f64], old_values: &[T]) -> Vec<T> {
    debug_assert_eq!(old_x.len(), old_values.len());

    if old_values.is_empty() {
        return vec![T::default(); new_x.len()];
    }

    new_x
        .iter()
        .map(|&x| {
            let idx = search_right(old_x, x).saturating_sub(1);

            old_values[idx.min(old_values.len() - 1)]
        })
        .collect()
}
