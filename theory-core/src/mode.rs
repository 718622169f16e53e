// Mode and scale-pattern definitions.
//
// Each mode is an ordered list of intervals measured from the tonic. The
// set is closed: church modes, pentatonics, jazz/blues patterns and the two
// modern minor scales. scales.rs turns these into spelled notes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArgumentKind, TheoryError};
use crate::interval::Interval;

use crate::interval::Interval::{
    AugmentedFourth as A4, DiminishedFifth as D5, MajorSecond as MAJ2, MajorSeventh as MAJ7,
    MajorSixth as MAJ6, MajorThird as MAJ3, MinorSecond as MIN2, MinorSeventh as MIN7,
    MinorSixth as MIN6, MinorThird as MIN3, PerfectFifth as P5, PerfectFourth as P4,
    PerfectUnison as P1,
};

/// Loose grouping of the modes, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeFamily {
    Church,
    Pentatonic,
    JazzBlues,
    Modern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Mode {
    /// The major scale.
    Ionian,
    /// Natural minor with a raised 6th.
    Dorian,
    /// Natural minor with a lowered 2nd.
    Phrygian,
    /// Major with a raised 4th.
    Lydian,
    /// Major with a lowered 7th.
    Mixolydian,
    /// Natural minor.
    Aeolian,
    /// Diminished 5th over a minor frame.
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    MixolydianPentatonic,
    BluesScale,
    BebopMajor,
    BebopMinor,
    BebopDominant,
    BebopDorian,
    HarmonicMinor,
    MelodicMinor,
}

impl Mode {
    /// Every mode in table order.
    pub const ALL: [Mode; 17] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
        Mode::MajorPentatonic,
        Mode::MinorPentatonic,
        Mode::MixolydianPentatonic,
        Mode::BluesScale,
        Mode::BebopMajor,
        Mode::BebopMinor,
        Mode::BebopDominant,
        Mode::BebopDorian,
        Mode::HarmonicMinor,
        Mode::MelodicMinor,
    ];

    /// Intervals from the tonic to each degree. Always starts with P1.
    pub fn intervals(self) -> &'static [Interval] {
        match self {
            Mode::Ionian => &[P1, MAJ2, MAJ3, P4, P5, MAJ6, MAJ7],
            Mode::Dorian => &[P1, MAJ2, MIN3, P4, P5, MAJ6, MIN7],
            Mode::Phrygian => &[P1, MIN2, MIN3, P4, P5, MIN6, MIN7],
            Mode::Lydian => &[P1, MAJ2, MAJ3, A4, P5, MAJ6, MAJ7],
            Mode::Mixolydian => &[P1, MAJ2, MAJ3, P4, P5, MAJ6, MIN7],
            Mode::Aeolian => &[P1, MAJ2, MIN3, P4, P5, MIN6, MIN7],
            Mode::Locrian => &[P1, MIN2, MIN3, P4, D5, MIN6, MIN7],
            Mode::MajorPentatonic => &[P1, MAJ2, MAJ3, P5, MAJ6],
            Mode::MinorPentatonic => &[P1, MIN3, P4, P5, MIN7],
            Mode::MixolydianPentatonic => &[P1, MAJ3, P4, P5, MIN7],
            Mode::BluesScale => &[P1, MIN3, P4, D5, P5, MIN7],
            Mode::BebopMajor => &[P1, MAJ2, MAJ3, P4, P5, MIN6, MAJ6, MAJ7],
            Mode::BebopMinor => &[P1, MAJ2, MIN3, P4, P5, MIN6, MAJ6, MAJ7],
            Mode::BebopDominant => &[P1, MAJ2, MAJ3, P4, P5, MAJ6, MIN7, MAJ7],
            Mode::BebopDorian => &[P1, MAJ2, MIN3, MAJ3, P4, P5, MAJ6, MIN7],
            Mode::HarmonicMinor => &[P1, MAJ2, MIN3, P4, P5, MIN6, MAJ7],
            Mode::MelodicMinor => &[P1, MAJ2, MIN3, P4, P5, MAJ6, MAJ7],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "Ionian",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian",
            Mode::Locrian => "Locrian",
            Mode::MajorPentatonic => "Major Pentatonic",
            Mode::MinorPentatonic => "Minor Pentatonic",
            Mode::MixolydianPentatonic => "Mixolydian Pentatonic",
            Mode::BluesScale => "Blues Scale",
            Mode::BebopMajor => "Bebop Major",
            Mode::BebopMinor => "Bebop Minor",
            Mode::BebopDominant => "Bebop Dominent",
            Mode::BebopDorian => "Bebop Dorian",
            Mode::HarmonicMinor => "Harmonic Minor",
            Mode::MelodicMinor => "Melodic Minor",
        }
    }

    pub fn family(self) -> ModeFamily {
        match self {
            Mode::Ionian
            | Mode::Dorian
            | Mode::Phrygian
            | Mode::Lydian
            | Mode::Mixolydian
            | Mode::Aeolian
            | Mode::Locrian => ModeFamily::Church,
            Mode::MajorPentatonic | Mode::MinorPentatonic | Mode::MixolydianPentatonic => {
                ModeFamily::Pentatonic
            }
            Mode::BluesScale
            | Mode::BebopMajor
            | Mode::BebopMinor
            | Mode::BebopDominant
            | Mode::BebopDorian => ModeFamily::JazzBlues,
            Mode::HarmonicMinor | Mode::MelodicMinor => ModeFamily::Modern,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The table keeps the historical "Dominent"; accept the dictionary spelling too.
        if s == "Bebop Dominant" {
            return Ok(Mode::BebopDominant);
        }
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| TheoryError::invalid(ArgumentKind::Mode, s))
    }
}

impl From<Mode> for &'static str {
    fn from(mode: Mode) -> Self {
        mode.name()
    }
}

impl TryFrom<String> for Mode {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The mode's intervals, optionally closed with a perfect octave.
pub fn mode_intervals(mode: Mode, with_octave: bool) -> Vec<Interval> {
    let mut intervals = mode.intervals().to_vec();
    if with_octave {
        intervals.push(Interval::OCTAVE);
    }
    intervals
}

/// The mode's intervals as semitone distances, optionally closed with 12.
pub fn mode_semitones(mode: Mode, with_octave: bool) -> Vec<u8> {
    mode_intervals(mode, with_octave)
        .into_iter()
        .map(Interval::semitones)
        .collect()
}

/// Names of every mode in table order.
pub fn mode_names() -> Vec<&'static str> {
    Mode::ALL.iter().map(|m| m.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_church_mode_semitones() {
        assert_eq!(mode_semitones(Mode::Ionian, false), vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(mode_semitones(Mode::Dorian, false), vec![0, 2, 3, 5, 7, 9, 10]);
        assert_eq!(mode_semitones(Mode::Phrygian, false), vec![0, 1, 3, 5, 7, 8, 10]);
        assert_eq!(mode_semitones(Mode::Lydian, false), vec![0, 2, 4, 6, 7, 9, 11]);
        assert_eq!(mode_semitones(Mode::Mixolydian, false), vec![0, 2, 4, 5, 7, 9, 10]);
        assert_eq!(mode_semitones(Mode::Aeolian, false), vec![0, 2, 3, 5, 7, 8, 10]);
        assert_eq!(mode_semitones(Mode::Locrian, false), vec![0, 1, 3, 5, 6, 8, 10]);
    }

    #[test]
    fn test_other_mode_semitones() {
        assert_eq!(mode_semitones(Mode::MixolydianPentatonic, false), vec![0, 4, 5, 7, 10]);
        assert_eq!(mode_semitones(Mode::BluesScale, false), vec![0, 3, 5, 6, 7, 10]);
        assert_eq!(mode_semitones(Mode::BebopDorian, false), vec![0, 2, 3, 4, 5, 7, 9, 10]);
        assert_eq!(mode_semitones(Mode::HarmonicMinor, false), vec![0, 2, 3, 5, 7, 8, 11]);
    }

    #[test]
    fn test_octave_is_appended() {
        let with = mode_intervals(Mode::Ionian, true);
        assert_eq!(with.len(), 8);
        assert_eq!(with[7], Interval::PerfectOctave);
        assert_eq!(mode_semitones(Mode::BluesScale, true).last(), Some(&12));
    }

    #[test]
    fn test_every_mode_starts_at_tonic_and_ascends() {
        for mode in Mode::ALL {
            let semitones = mode_semitones(mode, false);
            assert_eq!(semitones[0], 0, "{mode}");
            assert!(semitones.windows(2).all(|w| w[0] < w[1]), "{mode}");
        }
    }

    #[test]
    fn test_parse_names_and_alias() {
        assert_eq!("Major Pentatonic".parse::<Mode>(), Ok(Mode::MajorPentatonic));
        assert_eq!("Bebop Dominent".parse::<Mode>(), Ok(Mode::BebopDominant));
        assert_eq!("Bebop Dominant".parse::<Mode>(), Ok(Mode::BebopDominant));
        assert!("ionian".parse::<Mode>().is_err());
    }

    #[test]
    fn test_bebop_dominant_keeps_table_name() {
        assert_eq!(Mode::BebopDominant.name(), "Bebop Dominent");
        assert_eq!(mode_names()[13], "Bebop Dominent");

        let mode: Mode = "Bebop Dominant".parse().unwrap();
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, r#""Bebop Dominent""#);
        assert_eq!(serde_json::from_str::<Mode>(&json).unwrap(), Mode::BebopDominant);
    }

    #[test]
    fn test_families() {
        assert_eq!(Mode::Locrian.family(), ModeFamily::Church);
        assert_eq!(Mode::MinorPentatonic.family(), ModeFamily::Pentatonic);
        assert_eq!(Mode::BebopMinor.family(), ModeFamily::JazzBlues);
        assert_eq!(Mode::MelodicMinor.family(), ModeFamily::Modern);
    }
}
