// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for RAD.
//!
//! A config file sets the engine defaults (octave, accidental preference,
//! chord size) and can register custom chord and scale types. Files are
//! TOML or YAML, picked by extension.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::{
    Engine, ScaleChordOptions, DEFAULT_CHORD_SIZE, DEFAULT_OCTAVE, OCTAVE_RANGE,
};
use crate::music::{CustomChordDefinition, CustomScaleDefinition, Registry, SignType};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RadConfig {
    /// Engine defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Custom chord types
    #[serde(default)]
    pub chords: Vec<CustomChordDefinition>,
    /// Custom scale types
    #[serde(default)]
    pub scales: Vec<CustomScaleDefinition>,
}

/// Default conversion settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Octave of the first note
    #[serde(default = "default_octave")]
    pub octave: i32,
    /// Accidental preference
    #[serde(default)]
    pub sign: SignType,
    /// Tones per scale chord
    #[serde(default = "default_chord_size")]
    pub chord_size: usize,
}

fn default_octave() -> i32 {
    DEFAULT_OCTAVE
}
fn default_chord_size() -> usize {
    DEFAULT_CHORD_SIZE
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            octave: default_octave(),
            sign: SignType::Default,
            chord_size: default_chord_size(),
        }
    }
}

impl DefaultsConfig {
    /// Scale chord options built from these defaults
    pub fn scale_chord_options(&self) -> ScaleChordOptions {
        ScaleChordOptions {
            octave: self.octave,
            sign: self.sign,
            size: self.chord_size,
        }
    }
}

impl RadConfig {
    /// Load a configuration file, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
            other => bail!("Unsupported config format {:?} for {:?}", other, path),
        };

        info!(
            path = ?path,
            chords = config.chords.len(),
            scales = config.scales.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration to TOML")
    }

    /// Build a registry holding the custom definitions
    pub fn build_registry(&self) -> Result<Registry> {
        let mut builder = Registry::builder();

        for def in &self.chords {
            builder = builder
                .chord(def.clone())
                .with_context(|| format!("Invalid chord definition '{}'", def.name))?;
        }
        for def in &self.scales {
            builder = builder
                .scale(def.clone())
                .with_context(|| format!("Invalid scale definition '{}'", def.name))?;
        }

        debug!("registry built from config");
        Ok(builder.build())
    }

    /// Build an engine with this config's registry and defaults
    pub fn build_engine(&self) -> Result<Engine> {
        if self.defaults.chord_size == 0 {
            bail!("defaults.chord_size must be at least 1");
        }
        if !OCTAVE_RANGE.contains(&self.defaults.octave) {
            bail!(
                "defaults.octave {} is outside {:?}",
                self.defaults.octave,
                OCTAVE_RANGE
            );
        }

        let registry = self.build_registry()?;
        Ok(Engine::with_registry(Arc::new(registry))
            .with_defaults(self.defaults.scale_chord_options()))
    }
}
