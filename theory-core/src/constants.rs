//! # Music Theory Constants
//!
//! Fixed numbers of 12-tone equal temperament that the rest of the crate
//! derives everything else from.

/// Number of pitch classes in one octave.
pub const CHROMATIC_NOTES_COUNT: usize = 12;

/// Highest valid chromatic slot index.
pub const MAX_NOTE_INDEX: u8 = 11;

/// Lowest valid chromatic slot index.
pub const MIN_NOTE_INDEX: u8 = 0;

/// Semitones spanned by a perfect octave.
pub const OCTAVE_SEMITONES: u8 = 12;

/// A major key's relative minor sits a major sixth (9 semitones) above it.
pub const RELATIVE_MINOR_INTERVAL: i32 = 9;

/// Adjacent keys on the circle of fifths are a perfect fifth apart.
pub const CIRCLE_OF_FIFTHS_INTERVAL: i32 = 7;

/// Semitones spanned by a perfect fifth.
pub const PERFECT_FIFTH_SEMITONES: u8 = 7;
