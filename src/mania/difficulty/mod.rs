use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{
    model::{ManiaChart, RawNote, SpeedModifier, SunnyError},
    util::{
        difficulty::rescale_high,
        interpolate::{interp_linear, interp_step},
    },
};

use self::{
    corners::Corners,
    key_usage::KeyUsage,
    ln_bodies::LnBodies,
    object::NoteSequence,
    rating::SkillCurves,
    skills::{
        adjacency::Adjacency, anchor::Anchor, cross::Cross, density::Density, jack::Jack,
        press::Press, release::Release,
    },
};

use super::{attributes::SunnyAttributes, rates::SunnyRates, strains::SunnyStrains};

mod corners;
mod key_usage;
mod ln_bodies;
mod object;
mod rating;
mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 0.975;

/// Overall difficulty used when none is specified.
const DEFAULT_OD: f64 = 5.0;

/// Star rating of a chart, or [`SunnyError::SENTINEL`] if it could not be
/// calculated.
///
/// This never panics. Use [`SunnyDifficulty`] for access to the error.
///
/// # Example
///
/// ```
/// use rosu_sunny::{compute_difficulty, model::{RawNote, SpeedModifier}};
///
/// let notes: Vec<_> = (0..100)
///     .map(|i| RawNote::tap(i % 4, 1000.0 + i as f64 * 200.0))
///     .collect();
///
/// let stars = compute_difficulty(&notes, 4, 8.0, SpeedModifier::Normal);
/// assert!(stars > 0.0);
///
/// assert_eq!(compute_difficulty(&[], 4, 8.0, SpeedModifier::Normal), -1.0);
/// ```
pub fn compute_difficulty(
    notes: &[RawNote],
    key_count: usize,
    od: f64,
    modifier: SpeedModifier,
) -> f64 {
    let difficulty = SunnyDifficulty::new()
        .key_count(key_count)
        .od(od)
        .speed(modifier);

    match catch_unwind(AssertUnwindSafe(|| difficulty.calculate(notes))) {
        Ok(Ok(attrs)) => attrs.stars,
        Ok(Err(_err)) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(err = %_err, "failed to calculate star rating");

            SunnyError::SENTINEL
        }
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("panicked while calculating star rating");

            SunnyError::SENTINEL
        }
    }
}

/// Star rating calculator.
///
/// # Example
///
/// ```
/// use rosu_sunny::{SunnyDifficulty, model::{RawNote, SpeedModifier}};
///
/// let notes = [
///     RawNote::tap(0, 0.0),
///     RawNote::tap(1, 150.0),
///     RawNote::hold(2, 300.0, 900.0),
///     RawNote::tap(3, 450.0),
/// ];
///
/// let attrs = SunnyDifficulty::new()
///     .key_count(4)
///     .od(8.0)
///     .speed(SpeedModifier::DoubleTime)
///     .calculate(&notes)
///     .unwrap();
///
/// assert_eq!(attrs.n_notes, 4);
/// assert_eq!(attrs.n_hold_notes, 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct SunnyDifficulty {
    key_count: Option<usize>,
    od: Option<f64>,
    speed: SpeedModifier,
}

impl SunnyDifficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            key_count: None,
            od: None,
            speed: SpeedModifier::Normal,
        }
    }

    /// Specify the amount of columns.
    ///
    /// If unspecified, the highest column of the given notes determines it.
    pub const fn key_count(mut self, key_count: usize) -> Self {
        self.key_count = Some(key_count);

        self
    }

    /// Specify the overall difficulty.
    ///
    /// If unspecified, `5.0` is used.
    pub const fn od(mut self, od: f64) -> Self {
        self.od = Some(od);

        self
    }

    /// Specify how the chart's timing is altered.
    pub const fn speed(mut self, speed: SpeedModifier) -> Self {
        self.speed = speed;

        self
    }

    /// Specify a custom clock rate.
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        self.speed(SpeedModifier::from_clock_rate(clock_rate))
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`&rosu_mods::GameMods`](rosu_mods::GameMods)
    ///
    /// Only the clock rate of the mods is considered.
    pub fn mods(self, mods: impl Into<SpeedModifier>) -> Self {
        self.speed(mods.into())
    }

    /// Calculate the star rating of the given notes.
    pub fn calculate(&self, notes: &[RawNote]) -> Result<SunnyAttributes, SunnyError> {
        let key_count = self.key_count.unwrap_or_else(|| infer_key_count(notes));

        self.calculate_inner(notes, key_count, self.od.unwrap_or(DEFAULT_OD))
    }

    /// Calculate the star rating of a beatmap's notes.
    ///
    /// The chart's key count and overall difficulty are used unless they have
    /// been specified.
    pub fn calculate_chart(&self, chart: &ManiaChart) -> Result<SunnyAttributes, SunnyError> {
        let key_count = self.key_count.unwrap_or(chart.key_count);
        let od = self.od.unwrap_or(chart.od);

        self.calculate_inner(&chart.notes, key_count, od)
    }

    /// The difficulty over time that the star rating is built on.
    pub fn strains(&self, notes: &[RawNote]) -> Result<SunnyStrains, SunnyError> {
        let key_count = self.key_count.unwrap_or_else(|| infer_key_count(notes));

        self.strains_inner(notes, key_count, self.od.unwrap_or(DEFAULT_OD))
    }

    /// The difficulty over time of a beatmap's notes.
    ///
    /// The chart's key count and overall difficulty are used unless they have
    /// been specified.
    pub fn strains_chart(&self, chart: &ManiaChart) -> Result<SunnyStrains, SunnyError> {
        let key_count = self.key_count.unwrap_or(chart.key_count);
        let od = self.od.unwrap_or(chart.od);

        self.strains_inner(&chart.notes, key_count, od)
    }

    /// Calculate the star rating for each rate of [`SunnyRates::RATES`].
    ///
    /// The specified speed is ignored.
    pub fn all_rates(&self, notes: &[RawNote]) -> Result<SunnyRates, SunnyError> {
        let key_count = self.key_count.unwrap_or_else(|| infer_key_count(notes));

        Self::all_rates_inner(notes, key_count, self.od.unwrap_or(DEFAULT_OD))
    }

    /// Calculate the star rating of a beatmap's notes for each rate of
    /// [`SunnyRates::RATES`].
    ///
    /// The chart's key count and overall difficulty are used unless they have
    /// been specified. The specified speed is ignored.
    pub fn all_rates_chart(&self, chart: &ManiaChart) -> Result<SunnyRates, SunnyError> {
        let key_count = self.key_count.unwrap_or(chart.key_count);
        let od = self.od.unwrap_or(chart.od);

        Self::all_rates_inner(&chart.notes, key_count, od)
    }

    fn strains_inner(
        &self,
        notes: &[RawNote],
        key_count: usize,
        od: f64,
    ) -> Result<SunnyStrains, SunnyError> {
        let seq = NoteSequence::new(notes, key_count, od, self.speed)?;
        let values = DifficultyValues::calculate(&seq)?;

        Ok(SunnyStrains {
            corners: values.corners.into_vec(),
            values: values.difficulty,
        })
    }

    fn all_rates_inner(
        notes: &[RawNote],
        key_count: usize,
        od: f64,
    ) -> Result<SunnyRates, SunnyError> {
        let mut stars = [0.0; SunnyRates::RATES.len()];

        for (stars, &rate) in stars.iter_mut().zip(SunnyRates::RATES.iter()) {
            let seq = NoteSequence::new(notes, key_count, od, SpeedModifier::Rate(rate))?;
            *stars = DifficultyValues::calculate(&seq)?.stars;
        }

        Ok(SunnyRates { stars })
    }

    fn calculate_inner(
        &self,
        notes: &[RawNote],
        key_count: usize,
        od: f64,
    ) -> Result<SunnyAttributes, SunnyError> {
        let seq = NoteSequence::new(notes, key_count, od, self.speed)?;
        let values = DifficultyValues::calculate(&seq)?;

        Ok(SunnyAttributes {
            stars: values.stars,
            n_notes: seq.notes.len(),
            n_hold_notes: seq.holds.len(),
            key_count,
            hit_leniency: seq.hit_leniency,
            clock_rate: self.speed.clock_rate(),
        })
    }
}

fn infer_key_count(notes: &[RawNote]) -> usize {
    notes
        .iter()
        .map(|note| note.column.saturating_add(1))
        .max()
        .unwrap_or(1)
}

/// All intermediate results of a calculation.
pub struct DifficultyValues {
    /// The union grid.
    pub corners: Box<[f64]>,
    /// Difficulty at each corner of the union grid.
    pub difficulty: Vec<f64>,
    pub stars: f64,
}

impl DifficultyValues {
    pub fn calculate(seq: &NoteSequence) -> Result<Self, SunnyError> {
        let corners = Corners::new(seq);
        let base = &*corners.base;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            n_notes = seq.notes.len(),
            key_count = seq.key_count,
            base = base.len(),
            anchor = corners.anchor.len(),
            all = corners.all.len(),
            "calculating star rating"
        );

        let usage = KeyUsage::new(seq, base);
        let anchor = Anchor::compute(&usage.usage_400);
        let jack = Jack::compute(seq, base);
        let cross = Cross::compute(seq, &usage, base);
        let ln_bodies = LnBodies::new(&seq.holds, seq.end_time);
        let press = Press::compute(seq, &ln_bodies, &anchor, base);
        let adjacency = Adjacency::compute(&usage, &jack.deltas, base, &corners.anchor);
        let release = Release::compute(seq, base);
        let density = Density::compute(&seq.heads(), &usage, base);

        let all = &*corners.all;

        let curves = SkillCurves {
            jack: interp_linear(all, base, &jack.jbar),
            cross: interp_linear(all, base, &cross),
            press: interp_linear(all, base, &press),
            adjacency: interp_linear(all, &corners.anchor, &adjacency),
            release: interp_linear(all, base, &release),
            counts: interp_step(all, base, &density.counts),
            key_counts: interp_step(all, base, &density.key_counts),
        };

        let difficulty = curves.difficulty();

        let raw = rating::aggregate(all, &difficulty, &curves.counts);
        let total_notes = seq.weighted_note_count();
        let stars = rescale_high(raw * total_notes / (total_notes + 60.0)) * DIFFICULTY_MULTIPLIER;

        if !stars.is_finite() {
            return Err(SunnyError::NonFinite);
        }

        Ok(Self {
            corners: corners.all,
            difficulty,
            stars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(n: u32, spacing: f64) -> Vec<RawNote> {
        (0..n)
            .map(|i| RawNote::tap(i as usize % 4, 1000.0 + f64::from(i) * spacing))
            .collect()
    }

    #[test]
    fn sentinel_on_failure() {
        let normal = SpeedModifier::Normal;

        assert_eq!(compute_difficulty(&[], 4, 8.0, normal), SunnyError::SENTINEL);
        assert_eq!(
            compute_difficulty(&stream(10, 100.0), 0, 8.0, normal),
            SunnyError::SENTINEL
        );
        assert_eq!(
            compute_difficulty(&stream(10, 100.0), 3, 8.0, normal),
            SunnyError::SENTINEL
        );
    }

    #[test]
    fn builder_matches_entry_point() {
        let notes = stream(50, 150.0);

        let attrs = SunnyDifficulty::new()
            .key_count(4)
            .od(8.0)
            .calculate(&notes)
            .unwrap();

        assert_eq!(
            attrs.stars,
            compute_difficulty(&notes, 4, 8.0, SpeedModifier::Normal)
        );
        assert_eq!(attrs.n_notes, 50);
        assert_eq!(attrs.key_count, 4);
    }

    #[test]
    fn inferred_key_count() {
        let notes = stream(20, 150.0);

        let inferred = SunnyDifficulty::new().od(8.0).calculate(&notes).unwrap();
        let explicit = SunnyDifficulty::new()
            .key_count(4)
            .od(8.0)
            .calculate(&notes)
            .unwrap();

        assert_eq!(inferred, explicit);
    }

    #[test]
    fn oversized_column_is_an_error() {
        let notes = [RawNote::tap(usize::MAX, 100.0)];

        assert!(matches!(
            SunnyDifficulty::new().calculate(&notes),
            Err(SunnyError::InvalidKeyCount(usize::MAX))
        ));
        assert!(matches!(
            SunnyDifficulty::new().strains(&notes),
            Err(SunnyError::InvalidKeyCount(usize::MAX))
        ));
        assert!(matches!(
            SunnyDifficulty::new().all_rates(&notes),
            Err(SunnyError::InvalidKeyCount(usize::MAX))
        ));
        assert!(matches!(
            SunnyDifficulty::new().key_count(4).calculate(&notes),
            Err(SunnyError::InvalidColumn { key_count: 4, .. })
        ));
    }

    #[test]
    fn non_finite_hold_tail() {
        let notes = [
            RawNote::tap(0, 100.0),
            RawNote::hold(1, 200.0, f64::NAN),
            RawNote::tap(2, 300.0),
        ];

        assert_eq!(
            compute_difficulty(&notes, 4, 8.0, SpeedModifier::Normal),
            SunnyError::SENTINEL
        );
    }

    #[test]
    fn all_rates_match_single_rates() {
        let notes = stream(40, 150.0);
        let difficulty = SunnyDifficulty::new().key_count(4).od(8.0);
        let rates = difficulty
            .clone()
            .speed(SpeedModifier::HalfTime)
            .all_rates(&notes)
            .unwrap();

        for (rate, stars) in rates.iter() {
            let single = difficulty
                .clone()
                .speed(SpeedModifier::Rate(rate))
                .calculate(&notes)
                .unwrap();

            assert_eq!(stars, single.stars, "rate {rate}");
        }

        let normal = difficulty.calculate(&notes).unwrap();
        assert_eq!(rates.at(1.0), Some(normal.stars));
    }

    #[test]
    fn mods_and_clock_rate() {
        let by_mods = SunnyDifficulty::new().mods(64_u32);
        let by_rate = SunnyDifficulty::new().clock_rate(1.5);

        assert_eq!(by_mods, by_rate);
        assert_eq!(by_mods, SunnyDifficulty::new().speed(SpeedModifier::DoubleTime));
    }

    #[test]
    fn strains_cover_union_grid() {
        let strains = SunnyDifficulty::new()
            .key_count(4)
            .od(8.0)
            .strains(&stream(30, 120.0))
            .unwrap();

        assert_eq!(strains.corners.len(), strains.values.len());
        assert_eq!(strains.corners.first(), Some(&0.0));
        assert!(strains.values.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!(strains.peak() > 0.0);
    }
}
