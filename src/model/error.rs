use std::{error::Error as StdError, fmt, io::Error as IoError};

use rosu_map::section::general::GameMode;

/// Anything that could go wrong while calculating a star rating.
///
/// Every variant maps onto the same "not computable" outcome; see
/// [`SunnyError::SENTINEL`].
#[derive(Debug)]
#[non_exhaustive]
pub enum SunnyError {
    /// There were no notes to analyze.
    NoNotes,
    /// The key count is not within `1..=10`.
    InvalidKeyCount(usize),
    /// A note's column is not within `0..key_count`.
    InvalidColumn { column: usize, key_count: usize },
    /// A note's time or the clock rate was not a finite number.
    InvalidTime,
    /// The calculation produced a non-finite value.
    NonFinite,
    /// The beatmap is not an osu!mania map.
    UnsupportedMode(GameMode),
    /// The beatmap contains an object that osu!mania can't represent.
    UnsupportedObject { start_time: f64 },
    /// Failed to read or decode a beatmap.
    Io(IoError),
}

impl SunnyError {
    /// Value returned by the `f64` entry points instead of a star rating.
    pub const SENTINEL: f64 = -1.0;
}

impl fmt::Display for SunnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoNotes => f.write_str("no notes to analyze"),
            Self::InvalidKeyCount(key_count) => {
                write!(f, "key count must be between 1 and 10, got {key_count}")
            }
            Self::InvalidColumn { column, key_count } => {
                write!(f, "column {column} is out of range for {key_count} keys")
            }
            Self::InvalidTime => f.write_str("encountered a non-finite time or clock rate"),
            Self::NonFinite => f.write_str("calculation produced a non-finite value"),
            Self::UnsupportedMode(mode) => write!(f, "expected an osu!mania map, got {mode:?}"),
            Self::UnsupportedObject { start_time } => {
                write!(f, "unsupported hit object at {start_time}ms")
            }
            Self::Io(_) => f.write_str("IO error"),
        }
    }
}

impl StdError for SunnyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(inner) => Some(inner),
            Self::NoNotes
            | Self::InvalidKeyCount(_)
            | Self::InvalidColumn { .. }
            | Self::InvalidTime
            | Self::NonFinite
            | Self::UnsupportedMode(_)
            | Self::UnsupportedObject { .. } => None,
        }
    }
}

impl From<IoError> for SunnyError {
    fn from(other: IoError) -> Self {
        Self::Io(other)
    }
}
