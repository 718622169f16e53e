//! Melodic sequences built by stepping a fixed interval.

use crate::calculator;
use crate::interval::Interval;
use crate::note::{Note, Spelling};

/// Generates `count` notes from `start`, each `interval` above the last.
///
/// Steps wrap around the octave, so a chain of perfect fifths walks the
/// whole chromatic wheel after twelve notes.
pub fn note_list_by_step(
    start: Note,
    interval: Interval,
    count: usize,
    spelling: Spelling,
) -> Vec<Note> {
    tracing::trace!(%start, %interval, count, ?spelling, "stepping notes");
    calculator::note_list_by_step(start, i32::from(interval.semitones()), count, spelling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Note::*;

    #[test]
    fn test_major_seconds() {
        assert_eq!(
            note_list_by_step(C, Interval::MajorSecond, 4, Spelling::Sharp),
            vec![C, D, E, FSharp]
        );
        assert_eq!(
            note_list_by_step(C, Interval::MajorSecond, 4, Spelling::Flat),
            vec![C, D, E, GFlat]
        );
    }

    #[test]
    fn test_wraps_past_the_octave() {
        let notes = note_list_by_step(A, Interval::MajorSecond, 8, Spelling::Sharp);
        assert_eq!(notes, vec![A, B, CSharp, DSharp, F, G, A, B]);
    }

    #[test]
    fn test_unison_and_octave_repeat_the_start() {
        for interval in [Interval::PerfectUnison, Interval::PerfectOctave] {
            assert_eq!(note_list_by_step(C, interval, 3, Spelling::Sharp), vec![C, C, C]);
        }
    }

    #[test]
    fn test_fourths() {
        assert_eq!(
            note_list_by_step(F, Interval::PerfectFourth, 3, Spelling::Sharp),
            vec![F, ASharp, DSharp]
        );
    }
}
