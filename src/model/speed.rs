use rosu_mods::{GameMods, GameModsLegacy};

use crate::util::float_ext::FloatExt;

/// How the chart's timing is altered before the calculation.
///
/// The named variants use exact rational time scales so that timestamps
/// floor the same way regardless of floating point representation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum SpeedModifier {
    /// No timing change.
    #[default]
    Normal,
    /// Played at 1.5x speed, timestamps scaled by 2/3.
    DoubleTime,
    /// Played at 0.75x speed, timestamps scaled by 4/3.
    HalfTime,
    /// Played at an arbitrary clock rate, timestamps divided by the rate.
    Rate(f64),
}

impl SpeedModifier {
    /// Create a [`SpeedModifier`] from a clock rate, preferring the named
    /// variants where applicable.
    pub fn from_clock_rate(clock_rate: f64) -> Self {
        if FloatExt::eq(clock_rate, 1.0) {
            Self::Normal
        } else if FloatExt::eq(clock_rate, 1.5) {
            Self::DoubleTime
        } else if FloatExt::eq(clock_rate, 0.75) {
            Self::HalfTime
        } else {
            Self::Rate(clock_rate)
        }
    }

    /// The speed at which the chart is played.
    pub const fn clock_rate(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::DoubleTime => 1.5,
            Self::HalfTime => 0.75,
            Self::Rate(clock_rate) => clock_rate,
        }
    }

    /// The factor by which timestamps are multiplied.
    pub fn time_scale(self) -> f64 {
        self.clock_rate().recip()
    }

    /// Whether the modifier describes a usable clock rate.
    pub fn is_valid(self) -> bool {
        let clock_rate = self.clock_rate();

        clock_rate.is_finite() && clock_rate > 0.0
    }

    pub(crate) fn scale_time(self, time: f64) -> f64 {
        match self {
            Self::Normal => time,
            Self::DoubleTime => time * 2.0 / 3.0,
            Self::HalfTime => time * 4.0 / 3.0,
            Self::Rate(clock_rate) => time / clock_rate,
        }
    }
}

impl From<GameModsLegacy> for SpeedModifier {
    fn from(mods: GameModsLegacy) -> Self {
        if mods.contains(GameModsLegacy::DoubleTime) || mods.contains(GameModsLegacy::Nightcore) {
            Self::DoubleTime
        } else if mods.contains(GameModsLegacy::HalfTime) {
            Self::HalfTime
        } else {
            Self::Normal
        }
    }
}

impl From<u32> for SpeedModifier {
    fn from(bits: u32) -> Self {
        GameModsLegacy::from_bits(bits).into()
    }
}

impl From<&GameMods> for SpeedModifier {
    fn from(mods: &GameMods) -> Self {
        Self::from_clock_rate(mods.clock_rate().unwrap_or(1.0))
    }
}
