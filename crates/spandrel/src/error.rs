//! Error types for Spandrel operations.
//!
//! This module provides the main error type [`SpandrelError`] which wraps
//! the error conditions that can occur while generating and serializing
//! bridge drawings.

use std::io;

use thiserror::Error;

use crate::{export, params::ParameterError};

/// The main error type for Spandrel operations.
///
/// The taxonomy is deliberately small: parameters fail at construction,
/// typology tags fail at parse time before any geometry runs, and
/// serialization failures carry their underlying cause. Nothing is retried
/// and nothing is swallowed.
#[derive(Debug, Error)]
pub enum SpandrelError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("unsupported bridge typology `{0}`")]
    UnsupportedTypology(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("serialization failed: {0}")]
    Export(#[from] export::Error),
}
