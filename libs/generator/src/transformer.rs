//! Statically typed transformers, one per representation kind.
//!
//! Callers that know their field type at compile time can use these
//! directly. [`SelectorHandle`](crate::SelectorHandle) is assembled from
//! them when the kind is only known from configuration.

use ulidgen_codec::{codec, FormatError, UlidValue};

use crate::representation::{Representation, RepresentationKind};

/// Converts a [`UlidValue`] to and from one field representation.
pub trait ValueTransformer {
    /// The kind this transformer produces.
    const KIND: RepresentationKind;

    /// The field type.
    type Output;

    fn transform(value: UlidValue) -> Self::Output;

    fn parse(output: &Self::Output) -> Result<UlidValue, FormatError>;

    /// Lifts the field type into a [`Representation`].
    fn wrap(output: Self::Output) -> Representation;

    /// Borrows the field type out of a [`Representation`] of this kind.
    fn unwrap(repr: &Representation) -> Option<&Self::Output>;
}

/// Native values pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl ValueTransformer for PassThrough {
    const KIND: RepresentationKind = RepresentationKind::Native;
    type Output = UlidValue;

    fn transform(value: UlidValue) -> UlidValue {
        codec::identity(value)
    }

    fn parse(output: &UlidValue) -> Result<UlidValue, FormatError> {
        Ok(*output)
    }

    fn wrap(output: UlidValue) -> Representation {
        Representation::Native(output)
    }

    fn unwrap(repr: &Representation) -> Option<&UlidValue> {
        match repr {
            Representation::Native(value) => Some(value),
            _ => None,
        }
    }
}

/// Canonical 26-character strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl ValueTransformer for Text {
    const KIND: RepresentationKind = RepresentationKind::String;
    type Output = String;

    fn transform(value: UlidValue) -> String {
        codec::encode_string(value)
    }

    fn parse(output: &String) -> Result<UlidValue, FormatError> {
        codec::decode_string(output)
    }

    fn wrap(output: String) -> Representation {
        Representation::Text(output)
    }

    fn unwrap(repr: &Representation) -> Option<&String> {
        match repr {
            Representation::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// 16-byte big-endian buffers.
///
/// The output is a `Vec<u8>` so that buffers of any length read back from
/// storage reach the codec, which rejects everything but 16 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

impl ValueTransformer for Binary {
    const KIND: RepresentationKind = RepresentationKind::Bytes;
    type Output = Vec<u8>;

    fn transform(value: UlidValue) -> Vec<u8> {
        codec::encode_bytes(value).to_vec()
    }

    fn parse(output: &Vec<u8>) -> Result<UlidValue, FormatError> {
        codec::decode_bytes(output)
    }

    fn wrap(output: Vec<u8>) -> Representation {
        Representation::Bytes(output)
    }

    fn unwrap(repr: &Representation) -> Option<&Vec<u8>> {
        match repr {
            Representation::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}
