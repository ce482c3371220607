//! Error types for ULID decoding.

use std::fmt;

use thiserror::Error;

/// Why a decode was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatErrorReason {
    /// The input has the wrong length.
    #[error("bad length: expected {expected}, got {actual}")]
    BadLength { expected: usize, actual: usize },

    /// The input contains a character outside the base32 alphabet.
    #[error("bad character {character:?} at position {position}")]
    BadCharacter { position: usize, character: char },
}

/// The input that failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatInput {
    Text(String),
    Bytes(Vec<u8>),
}

impl fmt::Display for FormatInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatInput::Text(text) => write!(f, "{:?}", text),
            FormatInput::Bytes(bytes) => write!(f, "0x{}", hex::encode(bytes)),
        }
    }
}

/// A malformed string or byte representation of a ULID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed ULID {input}: {reason}")]
pub struct FormatError {
    pub reason: FormatErrorReason,
    pub input: FormatInput,
}

impl FormatError {
    pub(crate) fn bad_length(input: FormatInput, expected: usize, actual: usize) -> Self {
        Self {
            reason: FormatErrorReason::BadLength { expected, actual },
            input,
        }
    }

    pub(crate) fn bad_character(text: &str, position: usize, character: char) -> Self {
        Self {
            reason: FormatErrorReason::BadCharacter {
                position,
                character,
            },
            input: FormatInput::Text(text.to_string()),
        }
    }

    /// Returns true if the input had the wrong length.
    pub fn is_bad_length(&self) -> bool {
        matches!(self.reason, FormatErrorReason::BadLength { .. })
    }

    /// Returns true if the input contained a character outside the alphabet.
    pub fn is_bad_character(&self) -> bool {
        matches!(self.reason, FormatErrorReason::BadCharacter { .. })
    }

    /// Stable machine-readable reason code (`bad_length` or `bad_character`).
    pub fn code(&self) -> &'static str {
        match self.reason {
            FormatErrorReason::BadLength { .. } => "bad_length",
            FormatErrorReason::BadCharacter { .. } => "bad_character",
        }
    }
}
