/// The difficulty over the course of a chart.
///
/// Suitable to plot the difficulty curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SunnyStrains {
    /// Times in milliseconds, after rate adjustment, at which the difficulty
    /// was evaluated.
    pub corners: Vec<f64>,
    /// Difficulty at each corner.
    pub values: Vec<f64>,
}

impl SunnyStrains {
    /// The amount of evaluated corners.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pairs of time and difficulty.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.corners.iter().copied().zip(self.values.iter().copied())
    }

    /// The highest difficulty, `0` if empty.
    pub fn peak(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}
