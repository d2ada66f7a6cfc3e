// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! RAD - chord and scale symbol-to-pitch conversion.
//!
//! Turns a chord or scale specification into octave-qualified,
//! enharmonically spelled pitch names:
//!
//! ```
//! use rad::{chord, SignType};
//!
//! let notes = chord("Am7", 3, SignType::Default).unwrap();
//! assert_eq!(notes, vec!["A3", "C4", "E4", "G4"]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod music;

pub use config::RadConfig;
pub use engine::{
    chord, scale, scale_chords, ChordInput, ChordSpec, Engine, ScaleChordOptions, ScaleSpec,
    ShorthandParser, SymbolSplitter,
};
pub use error::{RadError, RadErrorKind, Result};
pub use music::{Registry, SignType};
