/// The result of a star rating calculation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SunnyAttributes {
    /// The final star rating.
    pub stars: f64,
    /// The amount of notes.
    pub n_notes: usize,
    /// The amount of hold notes.
    ///
    /// Holds that are shorter than a millisecond after rate adjustment count
    /// as regular notes.
    pub n_hold_notes: usize,
    /// The amount of columns.
    pub key_count: usize,
    /// Timing tolerance derived from the overall difficulty.
    pub hit_leniency: f64,
    /// The clock rate that was used.
    pub clock_rate: f64,
}

impl SunnyAttributes {
    /// Return the star rating.
    pub const fn stars(&self) -> f64 {
        self.stars
    }

    /// The amount of regular notes.
    pub const fn n_tap_notes(&self) -> usize {
        self.n_notes - self.n_hold_notes
    }
}
