//! Caller-side defaults for spelling and octave closing.
//!
//! Applications that always want flats, or always want closed scales, can
//! keep one `TheoryOptions` (for example loaded from their own JSON settings)
//! instead of threading the same two flags through every call.

use serde::{Deserialize, Serialize};

use crate::harmony::{self, CircleOfFifthsEntry};
use crate::mode::Mode;
use crate::note::{Note, Spelling};
use crate::scales;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TheoryOptions {
    /// Spelling used for dual-spelling slots. Defaults to sharps.
    pub spelling: Spelling,
    /// Repeat the tonic at the end of generated scales.
    pub with_octave: bool,
}

impl TheoryOptions {
    pub fn with_spelling(mut self, spelling: Spelling) -> Self {
        self.spelling = spelling;
        self
    }

    pub fn with_octave(mut self, with_octave: bool) -> Self {
        self.with_octave = with_octave;
        self
    }

    pub fn scale(&self, key: Note, mode: Mode) -> Vec<Note> {
        scales::scale(key, mode, self.spelling, self.with_octave)
    }

    pub fn relative_minor(&self, major_key: Note) -> Note {
        harmony::relative_minor(major_key, self.spelling)
    }

    pub fn circle_of_fifths(&self) -> Vec<CircleOfFifthsEntry> {
        harmony::circle_of_fifths(self.spelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TheoryOptions::default();
        assert_eq!(options.spelling, Spelling::Sharp);
        assert!(!options.with_octave);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options: TheoryOptions = serde_json::from_str(r#"{"spelling":"flat"}"#).unwrap();
        assert_eq!(options, TheoryOptions::default().with_spelling(Spelling::Flat));

        let options: TheoryOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TheoryOptions::default());
    }

    #[test]
    fn test_options_drive_scale() {
        let options = TheoryOptions::default()
            .with_spelling(Spelling::Flat)
            .with_octave(true);
        assert_eq!(
            options.scale(Note::BFlat, Mode::Ionian),
            vec![
                Note::BFlat,
                Note::C,
                Note::D,
                Note::EFlat,
                Note::F,
                Note::G,
                Note::A,
                Note::BFlat,
            ]
        );
        assert_eq!(options.relative_minor(Note::BFlat), Note::G);
    }
}
