//! # ulidgen-codec
//!
//! ULID value type and lossless conversions between its representations.
//!
//! ## Representations
//!
//! A ULID is a 128-bit value. This crate converts it losslessly between:
//!
//! - the native value ([`UlidValue`], a `high`/`low` pair of 64-bit halves)
//! - the canonical 26-character Crockford base32 string
//!   (e.g. `01ARZ3NDEKTSV4RRFFQ69G5FAV`)
//! - a 16-byte big-endian buffer (`high` bytes followed by `low` bytes)
//!
//! ## Design Principles
//!
//! - Encoding is total: every 128-bit value has exactly one canonical form
//! - Decoding is strict: wrong lengths and characters outside the alphabet
//!   are rejected with a [`FormatError`] carrying the offending input
//! - Decoding is case-insensitive; encoding is always uppercase
//! - No generation happens here; values come from an external supplier

pub mod base32;
pub mod codec;
mod error;
mod value;

pub use codec::{decode_bytes, decode_string, encode_bytes, encode_string, identity};
pub use error::{FormatError, FormatErrorReason, FormatInput};
pub use value::UlidValue;

/// Length of the canonical string representation.
pub const ULID_STRING_LEN: usize = 26;

/// Length of the byte representation.
pub const ULID_BYTES_LEN: usize = 16;
