use crate::model::{Note, RawNote, SpeedModifier, SunnyError};

/// Highest key count the cross-column coupling table covers.
pub const MAX_KEY_COUNT: usize = 10;

/// Head time assumed for a missing next note in a column.
const NO_NEXT_NOTE: f64 = 1e9;

/// Normalized notes together with the views every skill needs.
pub struct NoteSequence {
    /// All notes sorted by head time, then column.
    pub notes: Box<[Note]>,
    /// Notes of each column sorted by head time.
    pub by_column: Box<[Box<[Note]>]>,
    /// Hold notes sorted by head time, then column.
    pub holds: Box<[Note]>,
    /// Hold notes sorted by tail time.
    pub tails: Box<[Note]>,
    pub key_count: usize,
    pub hit_leniency: f64,
    /// One past the latest head or tail.
    pub end_time: f64,
}

impl NoteSequence {
    pub fn new(
        raw_notes: &[RawNote],
        key_count: usize,
        od: f64,
        speed: SpeedModifier,
    ) -> Result<Self, SunnyError> {
        if !(1..=MAX_KEY_COUNT).contains(&key_count) {
            return Err(SunnyError::InvalidKeyCount(key_count));
        }

        if !speed.is_valid() {
            return Err(SunnyError::InvalidTime);
        }

        if raw_notes.is_empty() {
            return Err(SunnyError::NoNotes);
        }

        let mut notes = Vec::with_capacity(raw_notes.len());

        for raw in raw_notes {
            if raw.column >= key_count {
                return Err(SunnyError::InvalidColumn {
                    column: raw.column,
                    key_count,
                });
            }

            if !raw.start_time.is_finite() || raw.end_time.is_some_and(|end| !end.is_finite()) {
                return Err(SunnyError::InvalidTime);
            }

            let note = Note::new(raw, speed);

            // Rate scaling can still overflow
            if !note.head.is_finite() || !note.end().is_finite() {
                return Err(SunnyError::InvalidTime);
            }

            notes.push(note);
        }

        notes.sort_by(Note::cmp_head_column);

        let end_time = notes
            .iter()
            .map(Note::end)
            .fold(f64::NEG_INFINITY, f64::max)
            + 1.0;

        // * Everything before the start of the map is ignored.
        if end_time <= 0.0 {
            return Err(SunnyError::NoNotes);
        }

        let hit_leniency = hit_leniency(od);

        if !hit_leniency.is_finite() || hit_leniency <= 0.0 {
            return Err(SunnyError::NonFinite);
        }

        let mut by_column = vec![Vec::new(); key_count];

        for note in notes.iter() {
            by_column[note.column].push(*note);
        }

        let holds: Box<[Note]> = notes.iter().filter(|note| note.is_hold()).copied().collect();

        let mut tails = holds.to_vec();
        tails.sort_by(|a, b| a.end().total_cmp(&b.end()));

        Ok(Self {
            notes: notes.into_boxed_slice(),
            by_column: by_column.into_iter().map(Vec::into_boxed_slice).collect(),
            holds,
            tails: tails.into_boxed_slice(),
            key_count,
            hit_leniency,
            end_time,
        })
    }

    /// Head time of the note following `note` in its column.
    pub fn next_head_in_column(&self, note: &Note) -> f64 {
        let column = &self.by_column[note.column];
        let idx = column.partition_point(|probe| probe.head < note.head);

        column.get(idx + 1).map_or(NO_NEXT_NOTE, |next| next.head)
    }

    /// Head times of all notes in order.
    pub fn heads(&self) -> Vec<f64> {
        self.notes.iter().map(|note| note.head).collect()
    }

    /// Note count where each hold note adds a bonus based on its duration.
    pub fn weighted_note_count(&self) -> f64 {
        let hold_bonus: f64 = self
            .holds
            .iter()
            .map(|note| 0.5 * note.duration().min(1000.0) / 200.0)
            .sum();

        self.notes.len() as f64 + hold_bonus
    }
}

/// Timing tolerance derived from the overall difficulty.
pub fn hit_leniency(od: f64) -> f64 {
    let x = 0.3 * f64::sqrt((64.5 - f64::ceil(od * 3.0)) / 500.0);

    x.min(0.6 * (x - 0.09) + 0.09)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(notes: &[RawNote]) -> NoteSequence {
        NoteSequence::new(notes, 4, 8.0, SpeedModifier::Normal).unwrap()
    }

    #[test]
    fn sorted_by_head_then_column() {
        let seq = sequence(&[
            RawNote::tap(3, 500.0),
            RawNote::tap(2, 100.0),
            RawNote::tap(0, 100.0),
            RawNote::hold(1, 300.0, 900.0),
        ]);

        let order: Vec<_> = seq.notes.iter().map(|n| (n.column, n.head)).collect();
        assert_eq!(order, [(0, 100.0), (2, 100.0), (1, 300.0), (3, 500.0)]);
        assert_eq!(seq.end_time, 901.0);
        assert_eq!(seq.holds.len(), 1);
        assert_eq!(seq.by_column[1].len(), 1);
        assert!(seq.by_column.iter().all(|column| column.len() == 1));
    }

    #[test]
    fn tails_sorted_by_tail() {
        let seq = sequence(&[
            RawNote::hold(0, 0.0, 2000.0),
            RawNote::hold(1, 100.0, 400.0),
            RawNote::hold(2, 200.0, 1000.0),
        ]);

        let tails: Vec<_> = seq.tails.iter().map(Note::end).collect();
        assert_eq!(tails, [400.0, 1000.0, 2000.0]);
    }

    #[test]
    fn next_head() {
        let seq = sequence(&[
            RawNote::hold(0, 0.0, 200.0),
            RawNote::tap(0, 450.0),
            RawNote::tap(1, 300.0),
        ]);

        assert_eq!(seq.next_head_in_column(&seq.by_column[0][0]), 450.0);
        assert_eq!(seq.next_head_in_column(&seq.by_column[0][1]), NO_NEXT_NOTE);
        assert_eq!(seq.next_head_in_column(&seq.by_column[1][0]), NO_NEXT_NOTE);
    }

    #[test]
    fn rejects_invalid_input() {
        let tap = [RawNote::tap(0, 0.0)];

        assert!(matches!(
            NoteSequence::new(&[], 4, 8.0, SpeedModifier::Normal),
            Err(SunnyError::NoNotes)
        ));
        assert!(matches!(
            NoteSequence::new(&tap, 0, 8.0, SpeedModifier::Normal),
            Err(SunnyError::InvalidKeyCount(0))
        ));
        assert!(matches!(
            NoteSequence::new(&tap, 11, 8.0, SpeedModifier::Normal),
            Err(SunnyError::InvalidKeyCount(11))
        ));
        assert!(matches!(
            NoteSequence::new(&[RawNote::tap(4, 0.0)], 4, 8.0, SpeedModifier::Normal),
            Err(SunnyError::InvalidColumn { column: 4, key_count: 4 })
        ));
        assert!(matches!(
            NoteSequence::new(&[RawNote::tap(0, f64::NAN)], 4, 8.0, SpeedModifier::Normal),
            Err(SunnyError::InvalidTime)
        ));
        for end_time in [f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
            let notes = [
                RawNote::tap(0, 100.0),
                RawNote::hold(1, 200.0, end_time),
                RawNote::tap(2, 300.0),
            ];

            assert!(
                matches!(
                    NoteSequence::new(&notes, 4, 8.0, SpeedModifier::Normal),
                    Err(SunnyError::InvalidTime)
                ),
                "{end_time}"
            );
        }
        assert!(matches!(
            NoteSequence::new(&[RawNote::tap(0, -50.0)], 4, 8.0, SpeedModifier::Normal),
            Err(SunnyError::NoNotes)
        ));
        assert!(matches!(
            NoteSequence::new(&tap, 4, 8.0, SpeedModifier::Rate(0.0)),
            Err(SunnyError::InvalidTime)
        ));
    }

    #[test]
    fn leniency() {
        let expected = 0.3 * f64::sqrt((64.5 - 24.0) / 500.0);
        let expected = expected.min(0.6 * (expected - 0.09) + 0.09);

        assert!((hit_leniency(8.0) - expected).abs() < 1e-15);
        assert!(hit_leniency(10.0) < hit_leniency(5.0));
        assert!(hit_leniency(0.0) > 0.0);
    }

    #[test]
    fn hold_bonus() {
        let seq = sequence(&[RawNote::tap(0, 0.0), RawNote::hold(1, 0.0, 3000.0)]);

        assert!((seq.weighted_note_count() - (2.0 + 0.5 * 1000.0 / 200.0)).abs() < 1e-12);
    }
}
