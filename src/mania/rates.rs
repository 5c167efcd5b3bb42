use crate::util::float_ext::FloatExt;

/// Star ratings of a chart for the common clock rates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SunnyRates {
    /// Star rating for each rate of [`SunnyRates::RATES`].
    pub stars: [f64; 14],
}

impl SunnyRates {
    /// Clock rates from 0.7x to 2.0x in steps of 0.1.
    pub const RATES: [f64; 14] = [
        0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0,
    ];

    /// The star rating at the given rate, if it is one of [`SunnyRates::RATES`].
    pub fn at(&self, clock_rate: f64) -> Option<f64> {
        Self::RATES
            .iter()
            .position(|&rate| FloatExt::eq(rate, clock_rate))
            .map(|idx| self.stars[idx])
    }

    /// Pairs of clock rate and star rating.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        Self::RATES.iter().copied().zip(self.stars.iter().copied())
    }
}
