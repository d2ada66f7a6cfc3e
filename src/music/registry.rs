// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Read-only lookup tables for notes, chord types, scale types and degrees.
//!
//! The built-in tables are compiled in. A [`Registry`] can additionally
//! carry custom chord and scale definitions, registered through a
//! [`RegistryBuilder`] before the registry is frozen. Custom definitions
//! shadow built-ins of the same name.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::chord::ChordType;
use super::note::{self, PitchClass};
use super::scale::{normalize_name, ScaleType};
use crate::error::{RadError, Result};

/// Highest degree with a fixed interval
pub const MAX_DEGREE: u8 = 15;

/// Custom chord type that can be loaded from config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomChordDefinition {
    /// Symbol used to look the chord up (e.g. "m7add11")
    pub name: String,
    /// Intervals above the root, root excluded
    pub intervals: Vec<i32>,
}

/// Custom scale type that can be loaded from config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomScaleDefinition {
    /// Name of the scale
    pub name: String,
    /// Step sizes between consecutive tones (semitones)
    pub steps: Vec<i32>,
}

/// Lookup registry: built-in tables plus optional custom definitions
#[derive(Debug, Clone, Default)]
pub struct Registry {
    custom_chords: HashMap<String, Vec<i32>>,
    custom_scales: HashMap<String, Vec<i32>>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Registry holding only the built-in tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a registry with custom definitions
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Process-wide built-in registry
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Convert a note symbol into its pitch class
    pub fn note_to_interval(&self, symbol: &str) -> Result<PitchClass> {
        note::note_to_interval(symbol)
    }

    /// Spelling set for a normalized pitch class
    pub fn interval_to_note(&self, interval: PitchClass) -> &'static [&'static str] {
        note::interval_to_note(interval)
    }

    /// Fresh copy of a chord type's intervals
    pub fn type_to_interval_arr(&self, chord_type: &str) -> Result<Vec<i32>> {
        let symbol = chord_type.trim();
        if let Some(intervals) = self.custom_chords.get(symbol) {
            return Ok(intervals.clone());
        }

        ChordType::from_str(symbol)
            .map(ChordType::intervals)
            .ok_or_else(|| RadError::UnknownChordType(chord_type.to_string()))
    }

    /// Fresh copy of a scale type's step pattern
    pub fn type_to_scale(&self, scale_type: &str) -> Result<Vec<i32>> {
        if let Some(steps) = self.custom_scales.get(&normalize_name(scale_type)) {
            return Ok(steps.clone());
        }

        ScaleType::from_str(scale_type)
            .map(ScaleType::steps)
            .ok_or_else(|| RadError::UnknownScaleType(scale_type.to_string()))
    }

    /// Absolute interval for a degree (1-15)
    pub fn degree_to_interval(&self, degree: u8) -> Result<i32> {
        degree_to_interval(degree)
    }

    /// List all available chord type symbols
    pub fn chord_type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_chords.keys().cloned().collect();
        names.extend(ChordType::ALL.iter().map(|c| c.symbol().to_string()));
        names.sort();
        names.dedup();
        names
    }

    /// List all available scale names
    pub fn scale_type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_scales.keys().cloned().collect();
        names.extend(ScaleType::ALL.iter().map(|s| s.key().to_string()));
        names.sort();
        names.dedup();
        names
    }
}

/// Absolute interval for a degree (1-15).
///
/// Degrees 8-15 repeat the major scale one octave up, which is where the
/// extended chord tones (9th, 11th, 13th) live.
pub fn degree_to_interval(degree: u8) -> Result<i32> {
    let interval = match degree {
        1 => 0,
        2 => 2,
        3 => 4,
        4 => 5,
        5 => 7,
        6 => 9,
        7 => 11,
        8 => 12,
        9 => 14,
        10 => 16,
        11 => 17,
        12 => 19,
        13 => 21,
        14 => 23,
        15 => 24,
        _ => return Err(RadError::UnknownDegree(degree)),
    };
    Ok(interval)
}

/// Collects custom definitions, then freezes them into a [`Registry`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Register a custom chord type
    pub fn chord(mut self, def: CustomChordDefinition) -> Result<Self> {
        let name = def.name.trim().to_string();
        if name.is_empty() {
            return Err(RadError::MalformedSpec("chord type with empty name".to_string()));
        }
        if def.intervals.is_empty() {
            return Err(RadError::MalformedSpec(format!(
                "chord type \"{}\" has no intervals",
                def.name
            )));
        }

        debug!(name = %def.name, intervals = ?def.intervals, "registering custom chord type");
        self.registry.custom_chords.insert(name, def.intervals);
        Ok(self)
    }

    /// Register a custom scale type
    pub fn scale(mut self, def: CustomScaleDefinition) -> Result<Self> {
        let key = normalize_name(&def.name);
        if key.is_empty() {
            return Err(RadError::MalformedSpec("scale type with empty name".to_string()));
        }
        if def.steps.is_empty() {
            return Err(RadError::MalformedSpec(format!(
                "scale type \"{}\" has no steps",
                def.name
            )));
        }
        if let Some(step) = def.steps.iter().find(|&&s| s < 0) {
            return Err(RadError::MalformedSpec(format!(
                "scale type \"{}\" has negative step {}",
                def.name, step
            )));
        }

        debug!(name = %def.name, steps = ?def.steps, "registering custom scale type");
        self.registry.custom_scales.insert(key, def.steps);
        Ok(self)
    }

    /// Freeze the registry
    pub fn build(self) -> Registry {
        self.registry
    }
}
