//! # Note Names
//!
//! The seventeen pitch spellings the chromatic table knows about, together
//! with the accidental and spelling-preference types used when turning a
//! chromatic slot back into a name.
//!
//! Names are rendered with the Unicode accidentals (`C♯`, `B♭`). Parsing also
//! accepts the ASCII forms `C#` and `Bb`, and an explicit natural sign on the
//! seven natural letters (`C♮`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArgumentKind, TheoryError};

/// The accidental attached to a note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// The Unicode sign for this accidental.
    pub fn symbol(self) -> char {
        match self {
            Accidental::Natural => '♮',
            Accidental::Sharp => '♯',
            Accidental::Flat => '♭',
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" | "♮" => Some(Accidental::Natural),
            "♯" | "#" => Some(Accidental::Sharp),
            "♭" | "b" => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// Which name to pick when a chromatic slot has both a sharp and a flat
/// spelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

impl Spelling {
    pub fn from_prefer_sharp(prefer_sharp: bool) -> Self {
        if prefer_sharp { Spelling::Sharp } else { Spelling::Flat }
    }

    /// Inverse of [`Spelling::from_prefer_sharp`], for callers that store the
    /// preference as a flag.
    pub fn prefers_sharp(self) -> bool {
        self == Spelling::Sharp
    }
}

impl From<bool> for Spelling {
    fn from(prefer_sharp: bool) -> Self {
        Spelling::from_prefer_sharp(prefer_sharp)
    }
}

/// A spelled pitch class.
///
/// `CSharp` and `DFlat` are different values that sound the same; use
/// [`crate::chromatic::slot_of`] to compare notes by pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Note {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
    CSharp,
    DSharp,
    FSharp,
    GSharp,
    ASharp,
    DFlat,
    EFlat,
    GFlat,
    AFlat,
    BFlat,
}

impl Note {
    /// Every spelling, naturals first, then sharps, then flats.
    pub const ALL: [Note; 17] = [
        Note::C,
        Note::D,
        Note::E,
        Note::F,
        Note::G,
        Note::A,
        Note::B,
        Note::CSharp,
        Note::DSharp,
        Note::FSharp,
        Note::GSharp,
        Note::ASharp,
        Note::DFlat,
        Note::EFlat,
        Note::GFlat,
        Note::AFlat,
        Note::BFlat,
    ];

    /// Canonical name with Unicode accidentals, e.g. `"G♭"`.
    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::D => "D",
            Note::E => "E",
            Note::F => "F",
            Note::G => "G",
            Note::A => "A",
            Note::B => "B",
            Note::CSharp => "C♯",
            Note::DSharp => "D♯",
            Note::FSharp => "F♯",
            Note::GSharp => "G♯",
            Note::ASharp => "A♯",
            Note::DFlat => "D♭",
            Note::EFlat => "E♭",
            Note::GFlat => "G♭",
            Note::AFlat => "A♭",
            Note::BFlat => "B♭",
        }
    }

    /// The bare letter without its accidental.
    pub fn letter(self) -> char {
        match self {
            Note::C | Note::CSharp => 'C',
            Note::D | Note::DSharp | Note::DFlat => 'D',
            Note::E | Note::EFlat => 'E',
            Note::F | Note::FSharp => 'F',
            Note::G | Note::GSharp | Note::GFlat => 'G',
            Note::A | Note::ASharp | Note::AFlat => 'A',
            Note::B | Note::BFlat => 'B',
        }
    }

    pub fn accidental(self) -> Accidental {
        match self {
            Note::C | Note::D | Note::E | Note::F | Note::G | Note::A | Note::B => {
                Accidental::Natural
            }
            Note::CSharp | Note::DSharp | Note::FSharp | Note::GSharp | Note::ASharp => {
                Accidental::Sharp
            }
            Note::DFlat | Note::EFlat | Note::GFlat | Note::AFlat | Note::BFlat => {
                Accidental::Flat
            }
        }
    }

    fn from_parts(letter: char, accidental: Accidental) -> Option<Note> {
        Note::ALL
            .into_iter()
            .find(|n| n.letter() == letter && n.accidental() == accidental)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next();
        let accidental = Accidental::from_suffix(chars.as_str());
        let note = match (letter, accidental) {
            (Some(letter), Some(accidental)) => Note::from_parts(letter, accidental),
            _ => None,
        };
        note.ok_or_else(|| TheoryError::invalid(ArgumentKind::Note, s))
    }
}

impl From<Note> for &'static str {
    fn from(note: Note) -> Self {
        note.name()
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unicode_names() {
        for note in Note::ALL {
            assert_eq!(note.name().parse::<Note>(), Ok(note));
        }
    }

    #[test]
    fn test_parse_ascii_aliases() {
        assert_eq!("C#".parse::<Note>(), Ok(Note::CSharp));
        assert_eq!("Bb".parse::<Note>(), Ok(Note::BFlat));
        assert_eq!("F♮".parse::<Note>(), Ok(Note::F));
    }

    #[test]
    fn test_parse_rejects_unknown_spellings() {
        // E♯ and C♭ exist in music theory but not in the chromatic table.
        for bad in ["", "H", "c", "E♯", "C♭", "C##", "Cb", "D♯♯", " C"] {
            assert!(bad.parse::<Note>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_accidental_symbols() {
        assert_eq!(Note::C.accidental().symbol(), '♮');
        assert_eq!(Note::FSharp.accidental().symbol(), '♯');
        assert_eq!(Note::AFlat.accidental().symbol(), '♭');
    }

    #[test]
    fn test_spelling_default_prefers_sharp() {
        assert!(Spelling::default().prefers_sharp());
        assert_eq!(Spelling::from(false), Spelling::Flat);
    }
}
