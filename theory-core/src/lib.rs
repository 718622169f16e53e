// theory-core/src/lib.rs

//! Chromatic music-theory tables and the functions derived from them.
//! This crate maps note names onto the 12-slot chromatic wheel and builds
//! scales, stepped note sequences, relative minors and the circle of fifths
//! from that wheel. Everything is computed from static tables; there is no
//! I/O and no mutable state.
//!
//! The typed API lives in the modules (`scales::scale(Note::C, Mode::Ionian,
//! ..)`) and cannot fail. The `get_*` functions below take names instead and
//! reject unknown ones with [`TheoryError::InvalidArgument`].

pub mod calculator;
pub mod chromatic;
pub mod constants;
pub mod error;
pub mod harmony;
pub mod interval;
pub mod melody;
pub mod mode;
pub mod note;
pub mod options;
pub mod scales;

pub use error::{ArgumentKind, Result, TheoryError};
pub use harmony::CircleOfFifthsEntry;
pub use interval::Interval;
pub use mode::{Mode, ModeFamily};
pub use note::{Accidental, Note, Spelling};
pub use options::TheoryOptions;

/// Spells the named mode starting on the named key.
pub fn get_scale(
    key: &str,
    mode: &str,
    prefer_sharp: bool,
    with_octave: bool,
) -> Result<Vec<Note>> {
    let key: Note = key.parse()?;
    let mode: Mode = mode.parse()?;
    Ok(scales::scale(key, mode, Spelling::from(prefer_sharp), with_octave))
}

/// `count` notes from `start`, each the named interval above the previous one.
pub fn get_note_list_by_step(
    start: &str,
    interval: &str,
    count: usize,
    prefer_sharp: bool,
) -> Result<Vec<Note>> {
    let start: Note = start.parse()?;
    let interval: Interval = interval.parse()?;
    Ok(melody::note_list_by_step(start, interval, count, Spelling::from(prefer_sharp)))
}

pub fn get_mode_interval(mode: &str, with_octave: bool) -> Result<Vec<Interval>> {
    Ok(mode::mode_intervals(mode.parse()?, with_octave))
}

pub fn get_mode_semitone(mode: &str, with_octave: bool) -> Result<Vec<u8>> {
    Ok(mode::mode_semitones(mode.parse()?, with_octave))
}

pub fn get_mode_list() -> Vec<&'static str> {
    mode::mode_names()
}

pub fn get_relative_minor_key(major_key: &str, prefer_sharp: bool) -> Result<Note> {
    let major_key: Note = major_key.parse()?;
    Ok(harmony::relative_minor(major_key, Spelling::from(prefer_sharp)))
}

pub fn get_circle_of_fifth_list(prefer_sharp: bool) -> Vec<CircleOfFifthsEntry> {
    harmony::circle_of_fifths(Spelling::from(prefer_sharp))
}

/// Chromatic slot (0-11) of a note name, C = 0.
pub fn get_key_index(key: &str) -> Result<u8> {
    chromatic::key_index(key)
}
