use std::cmp::Ordering;

use super::speed::SpeedModifier;

/// A note as it comes out of a beatmap, before any rate adjustment.
///
/// This is the only note type of the public API, the rate-adjusted notes
/// stay internal.
///
/// ```compile_fail
/// use rosu_sunny::model::Note;
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawNote {
    /// Zero-based column index.
    pub column: usize,
    /// Start time in milliseconds.
    pub start_time: f64,
    /// End time in milliseconds for hold notes.
    pub end_time: Option<f64>,
}

impl RawNote {
    /// Create a regular tap note.
    pub const fn tap(column: usize, start_time: f64) -> Self {
        Self {
            column,
            start_time,
            end_time: None,
        }
    }

    /// Create a hold note.
    pub const fn hold(column: usize, start_time: f64, end_time: f64) -> Self {
        Self {
            column,
            start_time,
            end_time: Some(end_time),
        }
    }

    /// Whether the note is a hold note.
    pub const fn is_hold(&self) -> bool {
        self.end_time.is_some()
    }
}

/// A rate-adjusted note with times floored to whole milliseconds.
///
/// `tail` is only `Some` if it lies strictly after `head`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Note {
    pub column: usize,
    pub head: f64,
    pub tail: Option<f64>,
}

impl Note {
    pub(crate) fn new(raw: &RawNote, speed: SpeedModifier) -> Self {
        let head = speed.scale_time(raw.start_time).floor();

        let tail = raw
            .end_time
            .map(|end_time| speed.scale_time(end_time).floor())
            .filter(|&tail| tail > head);

        Self {
            column: raw.column,
            head,
            tail,
        }
    }

    /// Whether the note is a hold note.
    pub const fn is_hold(&self) -> bool {
        self.tail.is_some()
    }

    /// The tail for hold notes, the head otherwise.
    pub fn end(&self) -> f64 {
        self.tail.unwrap_or(self.head)
    }

    /// Duration of the hold, `0` for taps.
    pub fn duration(&self) -> f64 {
        self.tail.map_or(0.0, |tail| tail - self.head)
    }

    pub(crate) fn cmp_head_column(&self, other: &Self) -> Ordering {
        self.head
            .total_cmp(&other.head)
            .then_with(|| self.column.cmp(&other.column))
    }
}
