use super::object::NoteSequence;

/// The three evaluation grids of a calculation.
///
/// Each grid is strictly increasing, starts at `0` and ends at the
/// sequence's end time.
pub struct Corners {
    /// Dense grid around every head and tail.
    pub base: Box<[f64]>,
    /// Coarse grid used for the column-adjacency penalty.
    pub anchor: Box<[f64]>,
    /// Union of both grids on which the final curve is evaluated.
    pub all: Box<[f64]>,
}

impl Corners {
    const BASE_OFFSETS: [f64; 3] = [501.0, -499.0, 1.0];
    const ANCHOR_OFFSETS: [f64; 2] = [1000.0, -1000.0];

    pub fn new(seq: &NoteSequence) -> Self {
        let times: Vec<f64> = seq
            .notes
            .iter()
            .flat_map(|note| std::iter::once(note.head).chain(note.tail))
            .collect();

        let base = Self::build(&times, &Self::BASE_OFFSETS, seq.end_time);
        let anchor = Self::build(&times, &Self::ANCHOR_OFFSETS, seq.end_time);

        let mut all = Vec::with_capacity(base.len() + anchor.len());
        all.extend_from_slice(&base);
        all.extend_from_slice(&anchor);
        all.sort_by(f64::total_cmp);
        all.dedup();

        Self {
            base,
            anchor,
            all: all.into_boxed_slice(),
        }
    }

    fn build(times: &[f64], offsets: &[f64], end_time: f64) -> Box<[f64]> {
        let mut corners = Vec::with_capacity(times.len() * (offsets.len() + 1) + 2);

        for &time in times {
            corners.push(time);
            corners.extend(offsets.iter().map(|offset| time + offset));
        }

        corners.push(0.0);
        corners.push(end_time);
        corners.retain(|&time| (0.0..=end_time).contains(&time));
        corners.sort_by(f64::total_cmp);
        corners.dedup();

        corners.into_boxed_slice()
    }
}
