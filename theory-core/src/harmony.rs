//! # Key Relationships
//!
//! Relative minor keys and the circle of fifths.

use serde::{Deserialize, Serialize};

use crate::calculator;
use crate::chromatic;
use crate::constants::{CHROMATIC_NOTES_COUNT, CIRCLE_OF_FIFTHS_INTERVAL, RELATIVE_MINOR_INTERVAL};
use crate::note::{Note, Spelling};

/// A major key paired with its relative minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleOfFifthsEntry {
    pub major: Note,
    pub minor: Note,
}

/// The relative minor of a major key.
///
/// The relative minor shares the major key's signature and sits nine
/// semitones above its tonic (a minor third below).
pub fn relative_minor(major_key: Note, spelling: Spelling) -> Note {
    calculator::note_at_offset(major_key, RELATIVE_MINOR_INTERVAL, spelling)
}

/// Walks the circle of fifths clockwise from C.
///
/// Returns twelve entries. Seven and twelve are coprime, so every chromatic
/// slot appears exactly once as a major key.
pub fn circle_of_fifths(spelling: Spelling) -> Vec<CircleOfFifthsEntry> {
    let mut index: u8 = 0;
    let mut list = Vec::with_capacity(CHROMATIC_NOTES_COUNT);

    for _ in 0..CHROMATIC_NOTES_COUNT {
        let major = calculator::note_at_slot(i64::from(index), spelling);
        let minor = relative_minor(major, spelling);
        list.push(CircleOfFifthsEntry { major, minor });
        index = chromatic::normalize(i64::from(index) + i64::from(CIRCLE_OF_FIFTHS_INTERVAL));
    }
    list
}
