use std::{io, path::Path, str::FromStr};

use rosu_map::{
    section::{
        general::GameMode,
        hit_objects::{HitObject, HitObjectKind},
    },
    Beatmap,
};

use super::{error::SunnyError, note::RawNote};

/// The parts of an osu!mania beatmap that the star rating depends on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManiaChart {
    pub notes: Vec<RawNote>,
    pub key_count: usize,
    pub od: f64,
}

impl ManiaChart {
    /// Extract the notes of a decoded osu!mania beatmap.
    ///
    /// Only osu!mania maps are accepted; converts are not supported.
    pub fn from_beatmap(map: &Beatmap) -> Result<Self, SunnyError> {
        if map.mode != GameMode::Mania {
            return Err(SunnyError::UnsupportedMode(map.mode));
        }

        let total_columns = map.circle_size.round().max(1.0);

        let notes = map
            .hit_objects
            .iter()
            .map(|h| Self::note(h, total_columns))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            notes,
            key_count: total_columns as usize,
            od: f64::from(map.overall_difficulty),
        })
    }

    /// Decode an `.osu` file and extract its notes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SunnyError> {
        let map = rosu_map::from_path::<Beatmap>(path)?;

        Self::from_beatmap(&map)
    }

    /// Decode the content of an `.osu` file and extract its notes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SunnyError> {
        let map = rosu_map::from_bytes::<Beatmap>(bytes)?;

        Self::from_beatmap(&map)
    }

    /// The amount of hold notes.
    pub fn n_hold_notes(&self) -> usize {
        self.notes.iter().filter(|note| note.is_hold()).count()
    }

    fn note(h: &HitObject, total_columns: f32) -> Result<RawNote, SunnyError> {
        match h.kind {
            HitObjectKind::Circle(ref circle) => Ok(RawNote::tap(
                Self::column(circle.pos.x, total_columns),
                h.start_time,
            )),
            HitObjectKind::Hold(ref hold) => Ok(RawNote::hold(
                Self::column(hold.pos_x, total_columns),
                h.start_time,
                h.start_time + hold.duration,
            )),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::warn!(start_time = h.start_time, "rejecting non-mania hit object");

                Err(SunnyError::UnsupportedObject {
                    start_time: h.start_time,
                })
            }
        }
    }

    fn column(x: f32, total_columns: f32) -> usize {
        let x_divisor = 512.0 / total_columns;

        (x / x_divisor).floor().clamp(0.0, total_columns - 1.0) as usize
    }
}

impl FromStr for ManiaChart {
    type Err = SunnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let map = rosu_map::from_str::<Beatmap>(s).map_err(io::Error::from)?;

        Self::from_beatmap(&map)
    }
}
