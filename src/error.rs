// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the conversion engine.
//!
//! Every variant carries the input that caused the failure so callers can
//! report it or prompt for a corrected value.

use thiserror::Error;

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, RadError>;

/// Errors raised by lookups and conversions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadError {
    /// Note symbol is not registered
    #[error("can't convert \"{0}\" into an interval")]
    UnknownNote(String),
    /// Chord type name is not registered
    #[error("can't find a chord type matching \"{0}\"")]
    UnknownChordType(String),
    /// Scale type name is not registered
    #[error("can't find a scale matching \"{0}\"")]
    UnknownScaleType(String),
    /// Degree outside 1..=15
    #[error("can't find an interval matching degree {0}, degrees run from 1 to 15")]
    UnknownDegree(u8),
    /// Accidental preference is not one of default/sharp/flat
    #[error("invalid sign type \"{0}\", expected default, sharp or flat")]
    InvalidSignType(String),
    /// Shorthand or definition could not be turned into a valid spec
    #[error("malformed spec: {0}")]
    MalformedSpec(String),
}

/// Discriminant of [`RadError`] for branching without matching payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadErrorKind {
    UnknownNote,
    UnknownChordType,
    UnknownScaleType,
    UnknownDegree,
    InvalidSignType,
    MalformedSpec,
}

impl RadError {
    /// Get the kind of this error
    pub fn kind(&self) -> RadErrorKind {
        match self {
            RadError::UnknownNote(_) => RadErrorKind::UnknownNote,
            RadError::UnknownChordType(_) => RadErrorKind::UnknownChordType,
            RadError::UnknownScaleType(_) => RadErrorKind::UnknownScaleType,
            RadError::UnknownDegree(_) => RadErrorKind::UnknownDegree,
            RadError::InvalidSignType(_) => RadErrorKind::InvalidSignType,
            RadError::MalformedSpec(_) => RadErrorKind::MalformedSpec,
        }
    }
}
