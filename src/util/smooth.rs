use super::search::search_left;

/// How [`smooth`] turns a window integral into a value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SmoothMode {
    /// Window integral multiplied by the given scale.
    Sum(f64),
    /// Window integral divided by the actual (clipped) window width.
    Avg,
}

/// Smooth a piecewise-constant function over an irregular grid.
///
/// `values[i]` is the value of the function on `[corners[i], corners[i + 1])`.
/// For every corner the function is integrated over
/// `[corner - window, corner + window]`, clipped to the grid's domain.
pub fn smooth(corners: &[f64], values: &[f64], window: f64, mode: SmoothMode) -> Vec<f64> {
    debug_assert_eq!(corners.len(), values.len());

    let (Some(&first), Some(&last)) = (corners.first(), corners.last()) else {
        return Vec::new();
    };

    let cumsum = cumulative_sum(corners, values);

    corners
        .iter()
        .map(|&corner| {
            let a = (corner - window).max(first);
            let b = (corner + window).min(last);
            let integral = query_cumsum(b, corners, &cumsum, values)
                - query_cumsum(a, corners, &cumsum, values);

            match mode {
                SmoothMode::Sum(scale) => scale * integral,
                SmoothMode::Avg if b - a > 0.0 => integral / (b - a),
                SmoothMode::Avg => 0.0,
            }
        })
        .collect()
}

fn cumulative_sum(corners: &[f64], values: &[f64]) -> Vec<f64> {
    let mut cumsum = Vec::with_capacity(corners.len());
    let mut acc = 0.0;
    cumsum.push(acc);

    for (pair, value) in corners.windows(2).zip(values) {
        acc += value * (pair[1] - pair[0]);
        cumsum.push(acc);
    }

    cumsum
}

fn query_cumsum(q: f64, corners: &[f64], cumsum: &[f64], values: &[f64]) -> f64 {
    if q <= corners[0] {
        return 0.0;
    }

    if q >= corners[corners.len() - 1] {
        return cumsum[cumsum.len() - 1];
    }

    let i = search_left(corners, q) - 1;

    cumsum[i] + values[i] * (q - corners[i])
}
