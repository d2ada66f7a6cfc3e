// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Built-in chord types.
//!
//! A chord type is an ordered list of intervals above an implicit root.
//! The root itself is never part of the list; the interval builder adds it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chord types supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordType {
    // Triads
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Power,

    // Sixths and sevenths
    Sixth,
    MinorSixth,
    Dominant7,
    Major7,
    Minor7,
    MinorMajor7,
    Diminished7,
    HalfDiminished7,
    Augmented7,
    Dominant7Sus4,

    // Extended
    Add9,
    MinorAdd9,
    Dominant9,
    Major9,
    Minor9,
    Dominant11,
    Minor11,
    Dominant13,
    Major13,
}

impl ChordType {
    /// All built-in chord types
    pub const ALL: [ChordType; 26] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Power,
        ChordType::Sixth,
        ChordType::MinorSixth,
        ChordType::Dominant7,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::MinorMajor7,
        ChordType::Diminished7,
        ChordType::HalfDiminished7,
        ChordType::Augmented7,
        ChordType::Dominant7Sus4,
        ChordType::Add9,
        ChordType::MinorAdd9,
        ChordType::Dominant9,
        ChordType::Major9,
        ChordType::Minor9,
        ChordType::Dominant11,
        ChordType::Minor11,
        ChordType::Dominant13,
        ChordType::Major13,
    ];

    /// Get the intervals above the root for this chord type
    pub fn intervals(self) -> Vec<i32> {
        match self {
            ChordType::Major => vec![4, 7],
            ChordType::Minor => vec![3, 7],
            ChordType::Diminished => vec![3, 6],
            ChordType::Augmented => vec![4, 8],
            ChordType::Sus2 => vec![2, 7],
            ChordType::Sus4 => vec![5, 7],
            ChordType::Power => vec![7],

            ChordType::Sixth => vec![4, 7, 9],
            ChordType::MinorSixth => vec![3, 7, 9],
            ChordType::Dominant7 => vec![4, 7, 10],
            ChordType::Major7 => vec![4, 7, 11],
            ChordType::Minor7 => vec![3, 7, 10],
            ChordType::MinorMajor7 => vec![3, 7, 11],
            ChordType::Diminished7 => vec![3, 6, 9],
            ChordType::HalfDiminished7 => vec![3, 6, 10],
            ChordType::Augmented7 => vec![4, 8, 10],
            ChordType::Dominant7Sus4 => vec![5, 7, 10],

            ChordType::Add9 => vec![4, 7, 14],
            ChordType::MinorAdd9 => vec![3, 7, 14],
            ChordType::Dominant9 => vec![4, 7, 10, 14],
            ChordType::Major9 => vec![4, 7, 11, 14],
            ChordType::Minor9 => vec![3, 7, 10, 14],
            ChordType::Dominant11 => vec![4, 7, 10, 14, 17],
            ChordType::Minor11 => vec![3, 7, 10, 14, 17],
            ChordType::Dominant13 => vec![4, 7, 10, 14, 17, 21],
            ChordType::Major13 => vec![4, 7, 11, 14, 17, 21],
        }
    }

    /// Parse chord type from its symbol or an alias.
    ///
    /// Symbols are case-sensitive since "M7" and "m7" are different chords.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "" | "maj" | "M" | "major" => Some(ChordType::Major),
            "m" | "min" | "minor" | "-" => Some(ChordType::Minor),
            "dim" | "°" => Some(ChordType::Diminished),
            "aug" | "+" => Some(ChordType::Augmented),
            "sus2" => Some(ChordType::Sus2),
            "sus4" | "sus" => Some(ChordType::Sus4),
            "5" => Some(ChordType::Power),
            "6" => Some(ChordType::Sixth),
            "m6" => Some(ChordType::MinorSixth),
            "7" => Some(ChordType::Dominant7),
            "maj7" | "M7" => Some(ChordType::Major7),
            "m7" | "min7" | "-7" => Some(ChordType::Minor7),
            "mM7" | "mmaj7" => Some(ChordType::MinorMajor7),
            "dim7" => Some(ChordType::Diminished7),
            "m7b5" | "half-dim" => Some(ChordType::HalfDiminished7),
            "aug7" | "7#5" => Some(ChordType::Augmented7),
            "7sus4" => Some(ChordType::Dominant7Sus4),
            "add9" => Some(ChordType::Add9),
            "madd9" => Some(ChordType::MinorAdd9),
            "9" => Some(ChordType::Dominant9),
            "maj9" | "M9" => Some(ChordType::Major9),
            "m9" | "min9" => Some(ChordType::Minor9),
            "11" => Some(ChordType::Dominant11),
            "m11" => Some(ChordType::Minor11),
            "13" => Some(ChordType::Dominant13),
            "maj13" | "M13" => Some(ChordType::Major13),
            _ => None,
        }
    }

    /// Get the canonical symbol for this chord type
    pub fn symbol(self) -> &'static str {
        match self {
            ChordType::Major => "maj",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Power => "5",
            ChordType::Sixth => "6",
            ChordType::MinorSixth => "m6",
            ChordType::Dominant7 => "7",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "m7",
            ChordType::MinorMajor7 => "mM7",
            ChordType::Diminished7 => "dim7",
            ChordType::HalfDiminished7 => "m7b5",
            ChordType::Augmented7 => "aug7",
            ChordType::Dominant7Sus4 => "7sus4",
            ChordType::Add9 => "add9",
            ChordType::MinorAdd9 => "madd9",
            ChordType::Dominant9 => "9",
            ChordType::Major9 => "maj9",
            ChordType::Minor9 => "m9",
            ChordType::Dominant11 => "11",
            ChordType::Minor11 => "m11",
            ChordType::Dominant13 => "13",
            ChordType::Major13 => "maj13",
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_type_intervals() {
        assert_eq!(ChordType::Major.intervals(), vec![4, 7]);
        assert_eq!(ChordType::Minor7.intervals(), vec![3, 7, 10]);
        assert_eq!(ChordType::Dominant13.intervals(), vec![4, 7, 10, 14, 17, 21]);
    }

    #[test]
    fn test_chord_type_from_str() {
        assert_eq!(ChordType::from_str(""), Some(ChordType::Major));
        assert_eq!(ChordType::from_str("m"), Some(ChordType::Minor));
        assert_eq!(ChordType::from_str("M7"), Some(ChordType::Major7));
        assert_eq!(ChordType::from_str("m7"), Some(ChordType::Minor7));
        assert_eq!(ChordType::from_str("7#5"), Some(ChordType::Augmented7));
        assert_eq!(ChordType::from_str("blah"), None);
    }

    #[test]
    fn test_symbols_parse_back() {
        for chord_type in ChordType::ALL {
            assert_eq!(ChordType::from_str(chord_type.symbol()), Some(chord_type));
        }
    }

    #[test]
    fn test_intervals_exclude_root() {
        for chord_type in ChordType::ALL {
            assert!(chord_type.intervals().iter().all(|&i| i > 0));
        }
    }
}
