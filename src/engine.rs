// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord and scale calculators plus the public entry points.
//!
//! Input arrives either as a structured spec or as a shorthand string.
//! Shorthand is resolved once through a [`ShorthandParser`] so the
//! calculators only ever see a [`ChordSpec`].

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{RadError, Result};
use crate::music::{
    absolute_interval_arr, degrees_to_interval_arr, interval_arr_to_notes,
    interval_arr_to_notes_o, scale_to_interval_arr, Interval, Registry, SignType,
};

/// Default octave for the first note of a chord or scale
pub const DEFAULT_OCTAVE: i32 = 4;

/// Octaves accepted from config and the command line (MIDI range C-1..G9)
pub const OCTAVE_RANGE: std::ops::RangeInclusive<i32> = -1..=9;

/// Default number of tones in a scale chord (triads)
pub const DEFAULT_CHORD_SIZE: usize = 3;

/// Structured chord specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordSpec {
    /// Root note symbol (e.g. "C", "F#", "Bb")
    pub root: String,
    /// Chord type symbol (e.g. "maj", "m7", "9")
    #[serde(rename = "type")]
    pub chord_type: String,
    /// Extra degrees stacked on top of the chord type (e.g. 9, 11)
    #[serde(default)]
    pub extensions: Vec<u8>,
}

impl ChordSpec {
    pub fn new(root: impl Into<String>, chord_type: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            chord_type: chord_type.into(),
            extensions: Vec::new(),
        }
    }

    /// Add extension degrees
    pub fn with_extensions(mut self, extensions: Vec<u8>) -> Self {
        self.extensions = extensions;
        self
    }
}

/// Structured scale specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSpec {
    /// Root note symbol
    pub root: String,
    /// Scale type name (e.g. "major", "dorian")
    #[serde(rename = "type")]
    pub scale_type: String,
}

impl ScaleSpec {
    pub fn new(root: impl Into<String>, scale_type: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            scale_type: scale_type.into(),
        }
    }
}

/// Chord input: either already structured or a shorthand symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordInput {
    Spec(ChordSpec),
    Shorthand(String),
}

impl From<ChordSpec> for ChordInput {
    fn from(spec: ChordSpec) -> Self {
        ChordInput::Spec(spec)
    }
}

impl From<&str> for ChordInput {
    fn from(s: &str) -> Self {
        ChordInput::Shorthand(s.to_string())
    }
}

impl From<String> for ChordInput {
    fn from(s: String) -> Self {
        ChordInput::Shorthand(s)
    }
}

/// Turns a shorthand chord symbol into a structured spec.
///
/// Implementations fail with [`RadError::MalformedSpec`] when the input
/// cannot be split into a root and a type.
pub trait ShorthandParser: Send + Sync {
    fn parse(&self, input: &str) -> Result<ChordSpec>;
}

/// Minimal shorthand parser: root letter, optional `#`/`b`, then the type.
///
/// "C" -> (C, maj), "F#m7" -> (F#, m7), "Bbmaj9" -> (Bb, maj9).
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolSplitter;

impl ShorthandParser for SymbolSplitter {
    fn parse(&self, input: &str) -> Result<ChordSpec> {
        let symbol = input.trim();
        let mut chars = symbol.char_indices();

        match chars.next() {
            Some((_, 'A'..='G')) => {}
            _ => return Err(RadError::MalformedSpec(input.to_string())),
        }

        let root_end = match chars.next() {
            Some((i, '#')) | Some((i, 'b')) => i + 1,
            _ => 1,
        };

        let (root, quality) = symbol.split_at(root_end);
        let chord_type = if quality.is_empty() { "maj" } else { quality };
        Ok(ChordSpec::new(root, chord_type))
    }
}

/// Options for building one chord per scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleChordOptions {
    /// Octave of the scale root
    pub octave: i32,
    /// Accidental preference
    pub sign: SignType,
    /// Tones per chord (3 = triads, 4 = sevenths)
    pub size: usize,
}

impl Default for ScaleChordOptions {
    fn default() -> Self {
        Self {
            octave: DEFAULT_OCTAVE,
            sign: SignType::Default,
            size: DEFAULT_CHORD_SIZE,
        }
    }
}

/// Conversion engine: a registry, a shorthand parser and default options
pub struct Engine {
    registry: Arc<Registry>,
    parser: Box<dyn ShorthandParser>,
    defaults: ScaleChordOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over the built-in tables
    pub fn new() -> Self {
        Self::with_registry(Arc::new(Registry::global().clone()))
    }

    /// Engine over a custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            parser: Box::new(SymbolSplitter),
            defaults: ScaleChordOptions::default(),
        }
    }

    /// Replace the shorthand parser
    pub fn with_parser(mut self, parser: impl ShorthandParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Replace the defaults used by [`Engine::scale_chords`]
    pub fn with_defaults(mut self, defaults: ScaleChordOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn defaults(&self) -> ScaleChordOptions {
        self.defaults
    }

    /// Resolve chord input into a structured spec
    pub fn resolve(&self, input: ChordInput) -> Result<ChordSpec> {
        match input {
            ChordInput::Spec(spec) => Ok(spec),
            ChordInput::Shorthand(symbol) => self.parser.parse(&symbol),
        }
    }

    /// Absolute intervals of a chord, root first
    pub fn chord_intervals(&self, spec: &ChordSpec) -> Result<Vec<Interval>> {
        let root = self.registry.note_to_interval(&spec.root)? as Interval;
        let mut intervals = self.registry.type_to_interval_arr(&spec.chord_type)?;
        intervals.extend(degrees_to_interval_arr(&self.registry, &spec.extensions)?);
        Ok(absolute_interval_arr(root, &intervals))
    }

    /// Octave-qualified pitch names for a chord
    pub fn chord(
        &self,
        input: impl Into<ChordInput>,
        init_octave: i32,
        sign_type: SignType,
    ) -> Result<Vec<String>> {
        let input = input.into();
        debug!(?input, init_octave, %sign_type, "chord");

        let spec = self.resolve(input)?;
        let intervals = self.chord_intervals(&spec)?;
        let notes = interval_arr_to_notes_o(&intervals, init_octave, sign_type);

        trace!(?notes, "chord resolved");
        Ok(notes)
    }

    /// Absolute scale intervals, root first, closing octave included
    pub fn scale_intervals(&self, spec: &ScaleSpec) -> Result<Vec<Interval>> {
        let root = self.registry.note_to_interval(&spec.root)? as Interval;
        let steps = self.registry.type_to_scale(&spec.scale_type)?;
        Ok(absolute_interval_arr(root, &scale_to_interval_arr(&steps)))
    }

    /// Octave-qualified pitch names for one scale, closing octave included
    pub fn scale(&self, spec: &ScaleSpec, init_octave: i32, sign_type: SignType) -> Result<Vec<String>> {
        debug!(?spec, init_octave, %sign_type, "scale");

        let intervals = self.scale_intervals(spec)?;
        let notes = interval_arr_to_notes_o(&intervals, init_octave, sign_type);

        trace!(?notes, "scale resolved");
        Ok(notes)
    }

    /// Pitch-class names of a scale's tones, without octaves or the closing octave
    pub fn scale_notes(&self, spec: &ScaleSpec, sign_type: SignType) -> Result<Vec<String>> {
        let mut intervals = self.scale_intervals(spec)?;
        intervals.pop();
        Ok(interval_arr_to_notes(&intervals, sign_type))
    }

    /// One chord per scale degree using the engine defaults
    pub fn scale_chords(&self, spec: &ScaleSpec) -> Result<Vec<Vec<String>>> {
        self.scale_chords_with(spec, self.defaults)
    }

    /// One chord per scale degree.
    ///
    /// Each chord stacks every other scale tone starting at its degree.
    /// Tones past the end of the scale wrap to the start one span higher,
    /// so the upper degrees climb into the next octave.
    pub fn scale_chords_with(
        &self,
        spec: &ScaleSpec,
        options: ScaleChordOptions,
    ) -> Result<Vec<Vec<String>>> {
        debug!(?spec, ?options, "scale chords");

        if options.size == 0 {
            return Err(RadError::MalformedSpec("scale chords need at least one tone".to_string()));
        }

        let root = self.registry.note_to_interval(&spec.root)? as Interval;
        let steps = self.registry.type_to_scale(&spec.scale_type)?;
        let span: Interval = steps.iter().sum();

        // Tones of one pass through the scale, root at 0, closing octave dropped
        let mut tones = absolute_interval_arr(0, &scale_to_interval_arr(&steps));
        tones.pop();
        let len = tones.len();

        let chords = (0..len)
            .map(|degree| {
                let intervals: Vec<Interval> = (0..options.size)
                    .map(|k| {
                        let index = degree + 2 * k;
                        root + tones[index % len] + span * (index / len) as Interval
                    })
                    .collect();
                interval_arr_to_notes_o(&intervals, options.octave, options.sign)
            })
            .collect::<Vec<_>>();

        trace!(?chords, "scale chords resolved");
        Ok(chords)
    }
}

static DEFAULT_ENGINE: OnceLock<Engine> = OnceLock::new();

fn default_engine() -> &'static Engine {
    DEFAULT_ENGINE.get_or_init(Engine::new)
}

/// Chord pitch names using the built-in tables
pub fn chord(input: impl Into<ChordInput>, init_octave: i32, sign_type: SignType) -> Result<Vec<String>> {
    default_engine().chord(input, init_octave, sign_type)
}

/// Scale pitch names using the built-in tables
pub fn scale(spec: &ScaleSpec, init_octave: i32, sign_type: SignType) -> Result<Vec<String>> {
    default_engine().scale(spec, init_octave, sign_type)
}

/// Diatonic triads for every degree of a scale using the built-in tables
pub fn scale_chords(spec: &ScaleSpec) -> Result<Vec<Vec<String>>> {
    default_engine().scale_chords(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::{CustomScaleDefinition, Registry};

    #[test]
    fn test_symbol_splitter() {
        let parser = SymbolSplitter;
        assert_eq!(parser.parse("C").unwrap(), ChordSpec::new("C", "maj"));
        assert_eq!(parser.parse("F#m7").unwrap(), ChordSpec::new("F#", "m7"));
        assert_eq!(parser.parse(" Bbmaj9 ").unwrap(), ChordSpec::new("Bb", "maj9"));
        assert_eq!(parser.parse("Ab").unwrap(), ChordSpec::new("Ab", "maj"));
    }

    #[test]
    fn test_symbol_splitter_rejects_garbage() {
        let parser = SymbolSplitter;
        assert!(matches!(parser.parse(""), Err(RadError::MalformedSpec(_))));
        assert!(matches!(parser.parse("Hm"), Err(RadError::MalformedSpec(_))));
        assert!(matches!(parser.parse("cm"), Err(RadError::MalformedSpec(_))));
    }

    #[test]
    fn test_chord_from_spec_and_shorthand() {
        let engine = Engine::new();
        let from_spec = engine
            .chord(ChordSpec::new("C", "maj"), 4, SignType::Sharp)
            .unwrap();
        let from_shorthand = engine.chord("C", 4, SignType::Sharp).unwrap();
        assert_eq!(from_spec, vec!["C4", "E4", "G4"]);
        assert_eq!(from_spec, from_shorthand);
    }

    #[test]
    fn test_chord_spelling_and_wrap() {
        let engine = Engine::new();
        assert_eq!(
            engine.chord("Am7", 3, SignType::Default).unwrap(),
            vec!["A3", "C4", "E4", "G4"]
        );
        assert_eq!(
            engine.chord("Ebm", 4, SignType::Sharp).unwrap(),
            vec!["D#4", "F#4", "A#4"]
        );
        assert_eq!(
            engine.chord("Eb", 4, SignType::Flat).unwrap(),
            vec!["Eb4", "G4", "Bb4"]
        );
    }

    #[test]
    fn test_chord_extensions() {
        let engine = Engine::new();
        let spec = ChordSpec::new("C", "7").with_extensions(vec![9, 13]);
        assert_eq!(
            engine.chord(spec, 4, SignType::Default).unwrap(),
            vec!["C4", "E4", "G4", "Bb4", "D5", "A5"]
        );

        let bad = ChordSpec::new("C", "7").with_extensions(vec![16]);
        assert_eq!(
            engine.chord(bad, 4, SignType::Default),
            Err(RadError::UnknownDegree(16))
        );
    }

    #[test]
    fn test_chord_errors_carry_input() {
        let engine = Engine::new();
        assert_eq!(
            engine.chord(ChordSpec::new("H", "maj"), 4, SignType::Default),
            Err(RadError::UnknownNote("H".to_string()))
        );
        assert_eq!(
            engine.chord("Cxyz", 4, SignType::Default),
            Err(RadError::UnknownChordType("xyz".to_string()))
        );
        assert_eq!(
            engine.chord("Cb", 4, SignType::Default),
            Err(RadError::UnknownNote("Cb".to_string()))
        );
    }

    #[test]
    fn test_scale() {
        let engine = Engine::new();
        let spec = ScaleSpec::new("C", "major");
        assert_eq!(
            engine.scale(&spec, 4, SignType::Default).unwrap(),
            vec!["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"]
        );

        let spec = ScaleSpec::new("F", "major");
        assert_eq!(
            engine.scale(&spec, 3, SignType::Flat).unwrap(),
            vec!["F3", "G3", "A3", "Bb3", "C4", "D4", "E4", "F4"]
        );
    }

    #[test]
    fn test_scale_notes() {
        let engine = Engine::new();
        let spec = ScaleSpec::new("A", "minor_pentatonic");
        assert_eq!(
            engine.scale_notes(&spec, SignType::Default).unwrap(),
            vec!["A", "C", "D", "E", "G"]
        );
    }

    #[test]
    fn test_scale_unknown_type() {
        let engine = Engine::new();
        assert_eq!(
            engine.scale(&ScaleSpec::new("C", "bebop"), 4, SignType::Default),
            Err(RadError::UnknownScaleType("bebop".to_string()))
        );
    }

    #[test]
    fn test_scale_chords_c_major() {
        let engine = Engine::new();
        let chords = engine.scale_chords(&ScaleSpec::new("C", "major")).unwrap();
        assert_eq!(chords.len(), 7);
        assert_eq!(chords[0], vec!["C4", "E4", "G4"]);
        assert_eq!(chords[1], vec!["D4", "F4", "A4"]);
        assert_eq!(chords[4], vec!["G4", "B4", "D5"]);
        assert_eq!(chords[6], vec!["B4", "D5", "F5"]);
    }

    #[test]
    fn test_scale_chords_sevenths() {
        let engine = Engine::new();
        let options = ScaleChordOptions {
            size: 4,
            ..ScaleChordOptions::default()
        };
        let chords = engine
            .scale_chords_with(&ScaleSpec::new("C", "major"), options)
            .unwrap();
        assert_eq!(chords[1], vec!["D4", "F4", "A4", "C5"]);
        assert_eq!(chords[4], vec!["G4", "B4", "D5", "F5"]);
    }

    #[test]
    fn test_scale_chords_zero_size() {
        let engine = Engine::new();
        let options = ScaleChordOptions {
            size: 0,
            ..ScaleChordOptions::default()
        };
        assert!(matches!(
            engine.scale_chords_with(&ScaleSpec::new("C", "major"), options),
            Err(RadError::MalformedSpec(_))
        ));
    }

    #[test]
    fn test_custom_registry_engine() {
        let registry = Registry::builder()
            .scale(CustomScaleDefinition {
                name: "hirajoshi".to_string(),
                steps: vec![2, 1, 4, 1, 4],
            })
            .unwrap()
            .build();
        let engine = Engine::with_registry(Arc::new(registry));
        assert_eq!(
            engine
                .scale(&ScaleSpec::new("A", "hirajoshi"), 3, SignType::Default)
                .unwrap(),
            vec!["A3", "B3", "C4", "E4", "F4", "A4"]
        );
    }

    struct FixedParser;

    impl ShorthandParser for FixedParser {
        fn parse(&self, _input: &str) -> Result<ChordSpec> {
            Ok(ChordSpec::new("D", "m"))
        }
    }

    #[test]
    fn test_custom_parser() {
        let engine = Engine::new().with_parser(FixedParser);
        assert_eq!(
            engine.chord("anything", 4, SignType::Default).unwrap(),
            vec!["D4", "F4", "A4"]
        );
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(chord("G7", 3, SignType::Default).unwrap(), vec!["G3", "B3", "D4", "F4"]);
        assert_eq!(scale(&ScaleSpec::new("D", "dorian"), 4, SignType::Default).unwrap().len(), 8);
        assert_eq!(scale_chords(&ScaleSpec::new("A", "minor")).unwrap()[0], vec!["A4", "C5", "E5"]);
    }
}
