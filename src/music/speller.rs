// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch spelling: absolute intervals to note names.
//!
//! Each interval is folded into a pitch class and an octave offset on its
//! own; octaves never carry over from one note to the next.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::note::{Note, PitchClass};
use crate::error::RadError;

/// Accidental preference used to pick between enharmonic spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignType {
    /// Most common spelling for each pitch class
    #[default]
    Default,
    /// Prefer sharps (C#, D#, F#, G#, A#)
    Sharp,
    /// Prefer flats (Db, Eb, Gb, Ab, Bb)
    Flat,
}

impl SignType {
    /// Index into a note's spelling set
    pub fn index(self) -> usize {
        match self {
            SignType::Default => 0,
            SignType::Sharp => 1,
            SignType::Flat => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignType::Default => "default",
            SignType::Sharp => "sharp",
            SignType::Flat => "flat",
        }
    }
}

impl FromStr for SignType {
    type Err = RadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(SignType::Default),
            "sharp" | "#" => Ok(SignType::Sharp),
            "flat" | "b" => Ok(SignType::Flat),
            _ => Err(RadError::InvalidSignType(s.to_string())),
        }
    }
}

impl fmt::Display for SignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Split an interval into a pitch class and the octave it lands in
///
/// The octave saturates at the `i32` bounds instead of overflowing.
fn normalize(interval: Interval, init_octave: i32) -> (PitchClass, i32) {
    let pitch_class = interval.rem_euclid(12) as PitchClass;
    let octave = init_octave.saturating_add(interval.div_euclid(12));
    (pitch_class, octave)
}

/// Spell intervals as octave-qualified names ("C4", "Eb5", ...)
pub fn interval_arr_to_notes_o(
    interval_arr: &[Interval],
    init_octave: i32,
    sign_type: SignType,
) -> Vec<String> {
    let index = sign_type.index();
    interval_arr
        .iter()
        .map(|&interval| {
            let (pitch_class, octave) = normalize(interval, init_octave);
            format!("{}{}", Note::from_pitch_class(pitch_class).spelling(index), octave)
        })
        .collect()
}

/// Spell intervals as bare pitch-class names ("C", "Eb", ...)
pub fn interval_arr_to_notes(interval_arr: &[Interval], sign_type: SignType) -> Vec<String> {
    let index = sign_type.index();
    interval_arr
        .iter()
        .map(|&interval| {
            let (pitch_class, _) = normalize(interval, 0);
            Note::from_pitch_class(pitch_class).spelling(index).to_string()
        })
        .collect()
}
