//! # Chromatic Table
//!
//! The twelve pitch classes of equal temperament, starting at C and rising
//! one semitone per slot. Seven slots hold a single natural note; the five
//! black-key slots hold both their sharp and flat spellings.
//!
//! This module also resolves note names to slot indices and folds arbitrary
//! integers back onto the 0-11 wheel.

use once_cell::sync::Lazy;

use crate::constants::{CHROMATIC_NOTES_COUNT, MAX_NOTE_INDEX, MIN_NOTE_INDEX};
use crate::error::Result;
use crate::note::Note;

/// One position on the chromatic wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaticSlot {
    /// A natural note with no enharmonic alternative in the table.
    Single(Note),
    /// Two spellings of the same pitch class.
    Pair { sharp: Note, flat: Note },
}

impl ChromaticSlot {
    /// Whether the spelling preference changes this slot's name.
    pub fn is_pair(self) -> bool {
        matches!(self, ChromaticSlot::Pair { .. })
    }

    /// Whether `note` is one of this slot's spellings.
    pub fn contains(self, note: Note) -> bool {
        match self {
            ChromaticSlot::Single(n) => n == note,
            ChromaticSlot::Pair { sharp, flat } => sharp == note || flat == note,
        }
    }

    /// The spellings held by this slot, sharp before flat.
    pub fn spellings(self) -> Vec<Note> {
        match self {
            ChromaticSlot::Single(n) => vec![n],
            ChromaticSlot::Pair { sharp, flat } => vec![sharp, flat],
        }
    }
}

/// The chromatic wheel, slot 0 = C.
pub const CHROMATIC_TABLE: [ChromaticSlot; CHROMATIC_NOTES_COUNT] = [
    ChromaticSlot::Single(Note::C),
    ChromaticSlot::Pair { sharp: Note::CSharp, flat: Note::DFlat },
    ChromaticSlot::Single(Note::D),
    ChromaticSlot::Pair { sharp: Note::DSharp, flat: Note::EFlat },
    ChromaticSlot::Single(Note::E),
    ChromaticSlot::Single(Note::F),
    ChromaticSlot::Pair { sharp: Note::FSharp, flat: Note::GFlat },
    ChromaticSlot::Single(Note::G),
    ChromaticSlot::Pair { sharp: Note::GSharp, flat: Note::AFlat },
    ChromaticSlot::Single(Note::A),
    ChromaticSlot::Pair { sharp: Note::ASharp, flat: Note::BFlat },
    ChromaticSlot::Single(Note::B),
];

/// Slot index of every spelling, indexed by `Note as usize`.
///
/// Built once by walking [`CHROMATIC_TABLE`], so the table is the only place
/// that says which spellings share a slot.
static NOTE_SLOTS: Lazy<[u8; Note::ALL.len()]> = Lazy::new(|| {
    let mut slots = [0; Note::ALL.len()];
    for (index, slot) in CHROMATIC_TABLE.iter().enumerate() {
        for note in slot.spellings() {
            slots[note as usize] = index as u8;
        }
    }
    slots
});

/// Folds any integer onto the chromatic wheel.
///
/// Uses a floored modulo, so negative inputs wrap from the top:
/// `normalize(-1) == 11`, `normalize(12) == 0`.
pub fn normalize(index: i64) -> u8 {
    let slot = index.rem_euclid(CHROMATIC_NOTES_COUNT as i64) as u8;
    debug_assert!((MIN_NOTE_INDEX..=MAX_NOTE_INDEX).contains(&slot));
    slot
}

/// Slot index (0-11) of a spelled note.
pub fn slot_of(note: Note) -> u8 {
    NOTE_SLOTS[note as usize]
}

/// Table entry at a slot index. The index is normalized first.
pub fn slot_at(index: i64) -> ChromaticSlot {
    CHROMATIC_TABLE[normalize(index) as usize]
}

/// Gets the slot index from a note name.
///
/// Accepts every name `Note::from_str` does (`D♭`, `Db`, `D♮`). Names outside
/// the table are rejected with [`crate::TheoryError::InvalidArgument`].
pub fn key_index(name: &str) -> Result<u8> {
    Ok(slot_of(name.parse()?))
}
