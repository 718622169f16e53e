//! Scale generation: a mode's intervals applied to a tonic.

use crate::calculator;
use crate::mode::Mode;
use crate::note::{Note, Spelling};

/// Spells `mode` starting on `key`.
///
/// With `with_octave` the first note is repeated at the end. The copy is
/// taken from the computed tonic rather than recomputed twelve semitones up,
/// so the closing note always carries the tonic's spelling.
pub fn scale(key: Note, mode: Mode, spelling: Spelling, with_octave: bool) -> Vec<Note> {
    tracing::trace!(%key, %mode, ?spelling, with_octave, "building scale");
    let offsets: Vec<i32> = mode
        .intervals()
        .iter()
        .map(|interval| i32::from(interval.semitones()))
        .collect();

    let mut notes = calculator::note_sequence(key, &offsets, spelling);
    if with_octave {
        if let Some(&tonic) = notes.first() {
            notes.push(tonic);
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Note::*;

    #[test]
    fn test_c_ionian() {
        assert_eq!(
            scale(C, Mode::Ionian, Spelling::Sharp, false),
            vec![C, D, E, F, G, A, B]
        );
    }

    #[test]
    fn test_octave_copies_tonic() {
        let notes = scale(C, Mode::Ionian, Spelling::Sharp, true);
        assert_eq!(notes.len(), 8);
        assert_eq!(notes.first(), notes.last());
    }

    #[test]
    fn test_spelling_preference() {
        assert_eq!(
            scale(F, Mode::Ionian, Spelling::Flat, false),
            vec![F, G, A, BFlat, C, D, E]
        );
        assert_eq!(
            scale(A, Mode::HarmonicMinor, Spelling::Sharp, false),
            vec![A, B, C, D, E, F, GSharp]
        );
    }

    #[test]
    fn test_flat_key_respelled_with_sharp_preference() {
        // The tonic itself goes through the table, so E♭ becomes D♯.
        assert_eq!(
            scale(EFlat, Mode::MajorPentatonic, Spelling::Sharp, false),
            vec![DSharp, F, G, ASharp, C]
        );
    }

    #[test]
    fn test_blues_scale() {
        assert_eq!(
            scale(A, Mode::BluesScale, Spelling::Flat, true),
            vec![A, C, D, EFlat, E, G, A]
        );
    }
}
