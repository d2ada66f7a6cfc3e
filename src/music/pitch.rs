// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Octave-qualified pitch names to MIDI note numbers.
//!
//! Uses the MIDI convention where middle C is C4 = 60.

use super::note::note_to_interval;
use crate::error::{RadError, Result};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Convert a name like "C4", "F#3" or "Bb-1" to a MIDI note number
pub fn pitch_to_midi(name: &str) -> Result<MidiNote> {
    let name = name.trim();
    let split = name
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_digit() || *c == '-')
        .map(|(i, _)| i)
        .ok_or_else(|| RadError::MalformedSpec(format!("pitch \"{}\" has no octave", name)))?;

    let (symbol, octave) = name.split_at(split);
    let pitch_class = note_to_interval(symbol)?;
    let octave: i32 = octave
        .parse()
        .map_err(|_| RadError::MalformedSpec(format!("pitch \"{}\" has an invalid octave", name)))?;

    octave
        .checked_add(1)
        .and_then(|o| o.checked_mul(12))
        .and_then(|m| m.checked_add(pitch_class as i32))
        .filter(|midi| (0..=127).contains(midi))
        .map(|midi| midi as MidiNote)
        .ok_or_else(|| {
            RadError::MalformedSpec(format!("pitch \"{}\" is outside the MIDI range", name))
        })
}

/// Convert a whole pitch sequence, stopping at the first bad name
pub fn names_to_midi<S: AsRef<str>>(names: &[S]) -> Result<Vec<MidiNote>> {
    names.iter().map(|n| pitch_to_midi(n.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_to_midi() {
        assert_eq!(pitch_to_midi("C4"), Ok(60));
        assert_eq!(pitch_to_midi("A4"), Ok(69));
        assert_eq!(pitch_to_midi("C#4"), Ok(61));
        assert_eq!(pitch_to_midi("Db4"), Ok(61));
        assert_eq!(pitch_to_midi("Bb3"), Ok(58));
        assert_eq!(pitch_to_midi("C-1"), Ok(0));
        assert_eq!(pitch_to_midi("G9"), Ok(127));
    }

    #[test]
    fn test_pitch_to_midi_errors() {
        assert_eq!(
            pitch_to_midi("H4"),
            Err(RadError::UnknownNote("H".to_string()))
        );
        assert!(matches!(pitch_to_midi("C"), Err(RadError::MalformedSpec(_))));
        assert!(matches!(pitch_to_midi("C4x"), Err(RadError::MalformedSpec(_))));
        assert!(matches!(pitch_to_midi("A9"), Err(RadError::MalformedSpec(_))));
        assert!(matches!(pitch_to_midi(""), Err(RadError::MalformedSpec(_))));
    }

    #[test]
    fn test_pitch_to_midi_huge_octave() {
        assert!(matches!(pitch_to_midi("C2147483647"), Err(RadError::MalformedSpec(_))));
        assert!(matches!(pitch_to_midi("B2147483646"), Err(RadError::MalformedSpec(_))));
        assert!(matches!(pitch_to_midi("C-2147483648"), Err(RadError::MalformedSpec(_))));
    }

    #[test]
    fn test_names_to_midi() {
        assert_eq!(names_to_midi(&["C4", "E4", "G4"]), Ok(vec![60, 64, 67]));
        assert!(names_to_midi(&["C4", "X4"]).is_err());
    }
}
