//! Error types for representation selection and generation.

use thiserror::Error;
use ulidgen_codec::FormatError;

use crate::representation::RepresentationKind;

/// A representation kind that no transformer handles.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unanticipated representation kind '{requested_kind}' for ULID conversion")]
pub struct UnsupportedKindError {
    pub requested_kind: String,
}

/// Errors from turning a representation back into a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The codec rejected the input.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The representation does not match the kind the handle was bound to.
    #[error("representation kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        expected: RepresentationKind,
        actual: RepresentationKind,
    },
}

impl ParseError {
    /// Returns the underlying codec error, if that is what failed.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            ParseError::Format(err) => Some(err),
            ParseError::KindMismatch { .. } => None,
        }
    }

    /// Returns true if the representation had the wrong kind.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, ParseError::KindMismatch { .. })
    }
}

/// Errors from producing a fresh identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The source cannot produce another value right now.
    #[error("ULID source exhausted: {0}")]
    SourceExhausted(String),
}
