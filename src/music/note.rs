// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and their enharmonic spellings.
//!
//! Each pitch class owns a spelling set indexed by accidental preference.
//! Index 0 is always present and is the fallback when a pitch class has no
//! distinct sharp or flat form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RadError, Result};

/// Pitch class value (0-11)
pub type PitchClass = u8;

/// Every note symbol the engine accepts, in chromatic order
pub const NOTE_SYMBOLS: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> PitchClass {
        self as PitchClass
    }

    /// Get note from pitch class, wrapping values above 11
    pub fn from_pitch_class(pc: PitchClass) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Look up a registered note symbol (e.g. "C", "F#", "Bb").
    ///
    /// Symbols are matched exactly.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "C" => Some(Note::C),
            "C#" | "Db" => Some(Note::Cs),
            "D" => Some(Note::D),
            "D#" | "Eb" => Some(Note::Ds),
            "E" => Some(Note::E),
            "F" => Some(Note::F),
            "F#" | "Gb" => Some(Note::Fs),
            "G" => Some(Note::G),
            "G#" | "Ab" => Some(Note::Gs),
            "A" => Some(Note::A),
            "A#" | "Bb" => Some(Note::As),
            "B" => Some(Note::B),
            _ => None,
        }
    }

    /// Spelling set: index 0 default, 1 sharp, 2 flat.
    ///
    /// Natural pitch classes only carry index 0.
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            Note::C => &["C"],
            Note::Cs => &["C#", "C#", "Db"],
            Note::D => &["D"],
            Note::Ds => &["Eb", "D#", "Eb"],
            Note::E => &["E"],
            Note::F => &["F"],
            Note::Fs => &["F#", "F#", "Gb"],
            Note::G => &["G"],
            Note::Gs => &["Ab", "G#", "Ab"],
            Note::A => &["A"],
            Note::As => &["Bb", "A#", "Bb"],
            Note::B => &["B"],
        }
    }

    /// Spelling at the given accidental index, falling back to the default
    pub fn spelling(self, index: usize) -> &'static str {
        let spellings = self.spellings();
        spellings.get(index).copied().unwrap_or(spellings[0])
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spelling(0))
    }
}

/// Convert a note symbol into its pitch class
pub fn note_to_interval(note: &str) -> Result<PitchClass> {
    Note::from_symbol(note)
        .map(Note::pitch_class)
        .ok_or_else(|| RadError::UnknownNote(note.to_string()))
}

/// Spelling set for a normalized pitch class (0-11)
pub fn interval_to_note(interval: PitchClass) -> &'static [&'static str] {
    debug_assert!(interval < 12, "pitch class {} not normalized", interval);
    Note::from_pitch_class(interval).spellings()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_pitch_class() {
        assert_eq!(Note::C.pitch_class(), 0);
        assert_eq!(Note::A.pitch_class(), 9);
        assert_eq!(Note::B.pitch_class(), 11);
        assert_eq!(Note::from_pitch_class(14), Note::D);
    }

    #[test]
    fn test_note_to_interval() {
        assert_eq!(note_to_interval("C"), Ok(0));
        assert_eq!(note_to_interval("Db"), Ok(1));
        assert_eq!(note_to_interval("F#"), Ok(6));
        assert_eq!(note_to_interval("Bb"), Ok(10));
        assert_eq!(
            note_to_interval("H"),
            Err(RadError::UnknownNote("H".to_string()))
        );
        // Symbols are case-sensitive
        assert!(note_to_interval("bb").is_err());
    }

    #[test]
    fn test_every_symbol_round_trips() {
        for symbol in NOTE_SYMBOLS {
            let interval = note_to_interval(symbol).unwrap();
            assert!(
                interval_to_note(interval).contains(&symbol),
                "{} missing from spelling set of {}",
                symbol,
                interval
            );
        }
    }

    #[test]
    fn test_spelling_fallback() {
        assert_eq!(Note::E.spelling(2), "E");
        assert_eq!(Note::As.spelling(1), "A#");
        assert_eq!(Note::As.spelling(2), "Bb");
        assert_eq!(Note::Cs.spelling(0), "C#");
    }

    #[test]
    fn test_display_uses_default_spelling() {
        assert_eq!(Note::Ds.to_string(), "Eb");
        assert_eq!(Note::G.to_string(), "G");
    }
}
