/// Weighted power mean `(Σ v^p * w / Σ w)^(1/p)`.
pub fn weighted_power_mean<I>(pairs: I, p: f64) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (num, den) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(num, den), (value, weight)| {
            (num + f64::powf(value, p) * weight, den + weight)
        });

    f64::powf(num / den, p.recip())
}

/// Compress star ratings above 9.
pub fn rescale_high(stars: f64) -> f64 {
    if stars <= 9.0 {
        stars
    } else {
        9.0 + (stars - 9.0) / 1.2
    }
}

/// Two-sided logistic blend of two timing indices.
///
/// Evaluates to 1 when both indices are large and drops towards 0 when
/// either is small.
pub fn sigmoid_blend(a: f64, b: f64, midpoint: f64, multiplier: f64) -> f64 {
    2.0 / (2.0
        + f64::exp(-multiplier * (a - midpoint))
        + f64::exp(-multiplier * (b - midpoint)))
}
