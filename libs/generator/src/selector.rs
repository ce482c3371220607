//! Binds a representation kind to its encode/decode pair once.

use tracing::debug;
use ulidgen_codec::UlidValue;

use crate::error::{ParseError, UnsupportedKindError};
use crate::representation::{Representation, RepresentationKind};
use crate::transformer::{Binary, PassThrough, Text, ValueTransformer};

type EncodeFn = fn(UlidValue) -> Representation;
type DecodeFn = fn(&Representation) -> Result<UlidValue, ParseError>;

/// A kind bound to its conversion functions.
///
/// Immutable after construction; `transform` and `parse` never look at the
/// kind again.
#[derive(Debug, Clone, Copy)]
pub struct SelectorHandle {
    kind: RepresentationKind,
    encode: EncodeFn,
    decode: DecodeFn,
}

/// Binds the conversions for a kind named in configuration.
///
/// # Errors
///
/// Returns [`UnsupportedKindError`] if `kind` names no supported
/// representation.
pub fn configure(kind: &str) -> Result<SelectorHandle, UnsupportedKindError> {
    let kind: RepresentationKind = kind.parse()?;
    Ok(SelectorHandle::for_kind(kind))
}

impl SelectorHandle {
    pub fn for_kind(kind: RepresentationKind) -> Self {
        let handle = match kind {
            RepresentationKind::Native => Self::bind::<PassThrough>(),
            RepresentationKind::String => Self::bind::<Text>(),
            RepresentationKind::Bytes => Self::bind::<Binary>(),
        };
        debug!(kind = %handle.kind, "bound ULID representation");
        handle
    }

    /// Binds a statically known transformer.
    pub fn bind<T: ValueTransformer>() -> Self {
        Self {
            kind: T::KIND,
            encode: encode_with::<T>,
            decode: decode_with::<T>,
        }
    }

    pub fn kind(&self) -> RepresentationKind {
        self.kind
    }

    /// Converts a value into the bound representation.
    pub fn transform(&self, value: UlidValue) -> Representation {
        (self.encode)(value)
    }

    /// Converts a representation of the bound kind back into a value.
    ///
    /// # Errors
    ///
    /// Codec failures surface unchanged as [`ParseError::Format`]; a
    /// representation of another kind is [`ParseError::KindMismatch`].
    pub fn parse(&self, repr: &Representation) -> Result<UlidValue, ParseError> {
        (self.decode)(repr)
    }
}

fn encode_with<T: ValueTransformer>(value: UlidValue) -> Representation {
    T::wrap(T::transform(value))
}

fn decode_with<T: ValueTransformer>(repr: &Representation) -> Result<UlidValue, ParseError> {
    let Some(output) = T::unwrap(repr) else {
        return Err(ParseError::KindMismatch {
            expected: T::KIND,
            actual: repr.kind(),
        });
    };
    Ok(T::parse(output)?)
}
