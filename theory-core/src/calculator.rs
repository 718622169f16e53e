//! # Note Calculator
//!
//! Slot arithmetic on the chromatic wheel. Every derived artifact in the
//! crate (scales, step sequences, relative keys, the circle of fifths) is
//! computed through the functions in this module.
//!
//! ## Features
//! - Sharp/flat spelling resolution for dual-spelling slots
//! - Offset lookups with wraparound in both directions
//! - Independent (fan-out) and cumulative (stepwise) note sequences

use crate::chromatic::{self, ChromaticSlot};
use crate::note::{Note, Spelling};

/// Picks a name for a chromatic slot.
///
/// Natural slots have only one name and ignore the preference. Dual slots
/// return their sharp spelling for [`Spelling::Sharp`] and their flat one
/// otherwise.
///
/// # Arguments
/// * `slot` - Entry from the chromatic table
/// * `spelling` - Sharp/flat preference
///
/// # Returns
/// * The spelled note
pub fn resolve_spelling(slot: ChromaticSlot, spelling: Spelling) -> Note {
    match (slot, spelling) {
        (ChromaticSlot::Single(note), _) => note,
        (ChromaticSlot::Pair { sharp, .. }, Spelling::Sharp) => sharp,
        (ChromaticSlot::Pair { flat, .. }, Spelling::Flat) => flat,
    }
}

/// Spells whatever note sits at `index` once folded onto the wheel.
pub fn note_at_slot(index: i64, spelling: Spelling) -> Note {
    resolve_spelling(chromatic::slot_at(index), spelling)
}

/// Calculates the note a given number of semitones away from `start`.
///
/// # Arguments
/// * `start` - Reference note
/// * `semitones` - Offset in semitones; negative values move downward
/// * `spelling` - Sharp/flat preference for the result
///
/// # Returns
/// * The note at the offset, spelled according to `spelling`
pub fn note_at_offset(start: Note, semitones: i32, spelling: Spelling) -> Note {
    note_at_slot(i64::from(chromatic::slot_of(start)) + i64::from(semitones), spelling)
}

/// Calculates one note per offset, each measured from `start`.
///
/// The offsets are independent: `[0, 4, 7]` from C yields C, E, G rather
/// than walking 0, then 4, then 7 further semitones.
///
/// # Arguments
/// * `start` - Reference note shared by every offset
/// * `offsets` - Semitone distances from `start`
/// * `spelling` - Sharp/flat preference for every result
///
/// # Returns
/// * Notes in the same order as `offsets`; empty when `offsets` is empty
pub fn note_sequence(start: Note, offsets: &[i32], spelling: Spelling) -> Vec<Note> {
    offsets
        .iter()
        .map(|&offset| note_at_offset(start, offset, spelling))
        .collect()
}

/// Generates `count` notes by repeatedly stepping `step` semitones.
///
/// Unlike [`note_sequence`] the steps accumulate. The first note is `start`
/// itself, re-spelled through the chromatic table, so `D♭` with a sharp
/// preference comes back as `C♯`.
///
/// # Arguments
/// * `start` - First note of the sequence
/// * `step` - Semitones added between consecutive notes
/// * `count` - Number of notes to produce
/// * `spelling` - Sharp/flat preference for every result
///
/// # Returns
/// * `count` notes; empty when `count` is zero
pub fn note_list_by_step(start: Note, step: i32, count: usize, spelling: Spelling) -> Vec<Note> {
    note_steps(start, step, spelling).take(count).collect()
}

/// Endless version of [`note_list_by_step`].
///
/// Nothing is allocated up front, so callers can `take` as many notes as
/// they like.
pub fn note_steps(start: Note, step: i32, spelling: Spelling) -> impl Iterator<Item = Note> {
    std::iter::successors(Some(chromatic::slot_of(start)), move |&index| {
        Some(chromatic::normalize(i64::from(index) + i64::from(step)))
    })
    .map(move |index| note_at_slot(i64::from(index), spelling))
}
