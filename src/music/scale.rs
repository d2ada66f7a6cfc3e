// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Built-in scale types.
//!
//! Scales are stored as step patterns (semitones between consecutive
//! tones), not as absolute positions. Every full pattern sums to 12 so the
//! last step lands on the octave.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scale types supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    // Major scale and modes
    Major,        // Ionian
    Dorian,       // Minor with raised 6th
    Phrygian,     // Minor with lowered 2nd
    Lydian,       // Major with raised 4th
    Mixolydian,   // Major with lowered 7th
    NaturalMinor, // Aeolian
    Locrian,      // Diminished

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Pentatonic scales
    MajorPentatonic,
    MinorPentatonic,

    Blues,

    // Symmetric scales
    WholeTone,
    Diminished, // Half-whole
    Chromatic,
}

impl ScaleType {
    /// All built-in scale types
    pub const ALL: [ScaleType; 15] = [
        ScaleType::Major,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::NaturalMinor,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::WholeTone,
        ScaleType::Diminished,
        ScaleType::Chromatic,
    ];

    /// Get the step pattern for this scale type
    pub fn steps(self) -> Vec<i32> {
        match self {
            ScaleType::Major => vec![2, 2, 1, 2, 2, 2, 1],
            ScaleType::Dorian => vec![2, 1, 2, 2, 2, 1, 2],
            ScaleType::Phrygian => vec![1, 2, 2, 2, 1, 2, 2],
            ScaleType::Lydian => vec![2, 2, 2, 1, 2, 2, 1],
            ScaleType::Mixolydian => vec![2, 2, 1, 2, 2, 1, 2],
            ScaleType::NaturalMinor => vec![2, 1, 2, 2, 1, 2, 2],
            ScaleType::Locrian => vec![1, 2, 2, 1, 2, 2, 2],

            ScaleType::HarmonicMinor => vec![2, 1, 2, 2, 1, 3, 1],
            ScaleType::MelodicMinor => vec![2, 1, 2, 2, 2, 2, 1],

            ScaleType::MajorPentatonic => vec![2, 2, 3, 2, 3],
            ScaleType::MinorPentatonic => vec![3, 2, 2, 3, 2],

            ScaleType::Blues => vec![3, 2, 1, 1, 3, 2],

            ScaleType::WholeTone => vec![2, 2, 2, 2, 2, 2],
            ScaleType::Diminished => vec![1, 2, 1, 2, 1, 2, 1, 2],
            ScaleType::Chromatic => vec![1; 12],
        }
    }

    /// Parse scale type from string
    pub fn from_str(s: &str) -> Option<Self> {
        match normalize_name(s).as_str() {
            "major" | "ionian" => Some(ScaleType::Major),
            "dorian" => Some(ScaleType::Dorian),
            "phrygian" => Some(ScaleType::Phrygian),
            "lydian" => Some(ScaleType::Lydian),
            "mixolydian" => Some(ScaleType::Mixolydian),
            "minor" | "naturalminor" | "aeolian" => Some(ScaleType::NaturalMinor),
            "locrian" => Some(ScaleType::Locrian),
            "harmonicminor" => Some(ScaleType::HarmonicMinor),
            "melodicminor" => Some(ScaleType::MelodicMinor),
            "majorpentatonic" | "pentatonicmajor" => Some(ScaleType::MajorPentatonic),
            "minorpentatonic" | "pentatonicminor" | "pentatonic" => Some(ScaleType::MinorPentatonic),
            "blues" | "minorblues" => Some(ScaleType::Blues),
            "wholetone" => Some(ScaleType::WholeTone),
            "diminished" | "octatonic" | "halfwhole" => Some(ScaleType::Diminished),
            "chromatic" => Some(ScaleType::Chromatic),
            _ => None,
        }
    }

    /// Get the registry key for this scale type
    pub fn key(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::NaturalMinor => "minor",
            ScaleType::Locrian => "locrian",
            ScaleType::HarmonicMinor => "harmonic_minor",
            ScaleType::MelodicMinor => "melodic_minor",
            ScaleType::MajorPentatonic => "major_pentatonic",
            ScaleType::MinorPentatonic => "minor_pentatonic",
            ScaleType::Blues => "blues",
            ScaleType::WholeTone => "whole_tone",
            ScaleType::Diminished => "diminished",
            ScaleType::Chromatic => "chromatic",
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
            ScaleType::WholeTone => "Whole Tone",
            ScaleType::Diminished => "Diminished",
            ScaleType::Chromatic => "Chromatic",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lower-case a scale name and strip separators ("Harmonic Minor" -> "harmonicminor")
pub fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-', '_'], "")
}
