//! # ulidgen-generator
//!
//! Binds a ULID representation to an identifier field once, then produces
//! identifiers in that representation.
//!
//! ## Flow
//!
//! 1. A [`RepresentationKind`] is read from configuration (`native`,
//!    `string` or `bytes`). Unknown kinds fail here, before any
//!    identifier is produced.
//! 2. [`configure`] (or [`SelectorHandle::for_kind`]) binds the matching
//!    encode/decode pair from `ulidgen-codec`. The handle is immutable and
//!    `Copy`, so it can be shared freely across threads.
//! 3. [`IdGenerator`] pulls fresh values from a [`UlidSource`] and runs
//!    them through the handle, returning an already assigned identifier
//!    untouched.
//!
//! ```
//! use ulidgen_generator::{configure, Representation};
//! use ulidgen_codec::UlidValue;
//!
//! let handle = configure("string").unwrap();
//! let value = UlidValue::from_parts(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
//! let repr = handle.transform(value);
//! assert_eq!(repr, Representation::Text("014D2PF2DBSQQZXQ5TK1V58CGG".into()));
//! assert_eq!(handle.parse(&repr).unwrap(), value);
//! ```

mod config;
mod error;
mod generator;
mod representation;
mod selector;
mod source;
mod transformer;

pub use config::{GeneratorConfig, MONOTONIC_VAR, REPRESENTATION_VAR};
pub use error::{GenerateError, ParseError, UnsupportedKindError};
pub use generator::IdGenerator;
pub use representation::{Representation, RepresentationKind};
pub use selector::{configure, SelectorHandle};
pub use source::{ConfiguredSource, MonotonicSource, SystemSource, UlidSource};
pub use transformer::{Binary, PassThrough, Text, ValueTransformer};

/// Re-export the codec for consumers that need raw conversions.
pub use ulidgen_codec as codec;
