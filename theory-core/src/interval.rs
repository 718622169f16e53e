//! # Intervals
//!
//! Named distances between two pitch classes. The augmented fourth and the
//! diminished fifth are different names for the same six semitones; both
//! are kept because modes are written with whichever name fits their degree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{OCTAVE_SEMITONES, PERFECT_FIFTH_SEMITONES};
use crate::error::{ArgumentKind, TheoryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Interval {
    PerfectUnison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    DiminishedFifth,
    AugmentedFourth,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
    PerfectOctave,
}

impl Interval {
    /// All intervals in table order.
    pub const ALL: [Interval; 14] = [
        Interval::PerfectUnison,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::DiminishedFifth,
        Interval::AugmentedFourth,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
        Interval::PerfectOctave,
    ];

    /// Appended to a mode when the octave is requested.
    pub const OCTAVE: Interval = Interval::PerfectOctave;

    /// Distance in semitones, always within `0..=12`.
    pub fn semitones(self) -> u8 {
        match self {
            Interval::PerfectUnison => 0,
            Interval::MinorSecond => 1,
            Interval::MajorSecond => 2,
            Interval::MinorThird => 3,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => 5,
            Interval::DiminishedFifth | Interval::AugmentedFourth => 6,
            Interval::PerfectFifth => PERFECT_FIFTH_SEMITONES,
            Interval::MinorSixth => 8,
            Interval::MajorSixth => 9,
            Interval::MinorSeventh => 10,
            Interval::MajorSeventh => 11,
            Interval::PerfectOctave => OCTAVE_SEMITONES,
        }
    }

    /// Short name: quality letter followed by the degree number.
    pub fn short_name(self) -> &'static str {
        match self {
            Interval::PerfectUnison => "P1",
            Interval::MinorSecond => "m2",
            Interval::MajorSecond => "M2",
            Interval::MinorThird => "m3",
            Interval::MajorThird => "M3",
            Interval::PerfectFourth => "P4",
            Interval::DiminishedFifth => "d5",
            Interval::AugmentedFourth => "A4",
            Interval::PerfectFifth => "P5",
            Interval::MinorSixth => "m6",
            Interval::MajorSixth => "M6",
            Interval::MinorSeventh => "m7",
            Interval::MajorSeventh => "M7",
            Interval::PerfectOctave => "P8",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|i| i.short_name() == s)
            .ok_or_else(|| TheoryError::invalid(ArgumentKind::Interval, s))
    }
}

impl From<Interval> for &'static str {
    fn from(interval: Interval) -> Self {
        interval.short_name()
    }
}

impl TryFrom<String> for Interval {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tritone_names_share_distance() {
        assert_eq!(
            Interval::AugmentedFourth.semitones(),
            Interval::DiminishedFifth.semitones()
        );
        assert_ne!(Interval::AugmentedFourth, Interval::DiminishedFifth);
    }

    #[test]
    fn test_quality_is_case_sensitive() {
        assert_eq!("m3".parse::<Interval>(), Ok(Interval::MinorThird));
        assert_eq!("M3".parse::<Interval>(), Ok(Interval::MajorThird));
        assert!("p5".parse::<Interval>().is_err());
        assert!("M9".parse::<Interval>().is_err());
    }

    #[test]
    fn test_semitones_stay_within_an_octave() {
        for interval in Interval::ALL {
            assert!(interval.semitones() <= 12);
        }
        assert_eq!(Interval::OCTAVE.semitones(), 12);
    }
}
