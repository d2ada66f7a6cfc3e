// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core for RAD.
//!
//! Lookup tables, interval arithmetic and pitch spelling. Everything here
//! is pure: lookups hand back owned copies and conversions allocate fresh
//! output, so it is safe to call from any thread.

pub mod chord;
pub mod interval;
pub mod note;
pub mod pitch;
pub mod registry;
pub mod scale;
pub mod speller;

pub use chord::ChordType;
pub use interval::{absolute_interval_arr, degrees_to_interval_arr, scale_to_interval_arr, Interval};
pub use note::{interval_to_note, note_to_interval, Note, PitchClass, NOTE_SYMBOLS};
pub use pitch::{names_to_midi, pitch_to_midi, MidiNote};
pub use registry::{
    degree_to_interval, CustomChordDefinition, CustomScaleDefinition, Registry, RegistryBuilder,
    MAX_DEGREE,
};
pub use scale::ScaleType;
pub use speller::{interval_arr_to_notes, interval_arr_to_notes_o, SignType};
