//! Conversions between a [`UlidValue`] and its serialized forms.
//!
//! Every function here is pure: it reads only its argument and allocates
//! only its output.

use crate::base32;
use crate::error::{FormatError, FormatInput};
use crate::value::UlidValue;
use crate::ULID_BYTES_LEN;

/// Encodes a value as its canonical 26-character uppercase string.
pub fn encode_string(value: UlidValue) -> String {
    base32::encode(value.as_u128())
        .iter()
        .map(|&symbol| char::from(symbol))
        .collect()
}

/// Decodes a 26-character base32 string, in either case.
///
/// # Errors
///
/// Returns a [`FormatError`] with a bad-length reason if `text` is not 26
/// characters long, or a bad-character reason naming the first character
/// outside the alphabet.
pub fn decode_string(text: &str) -> Result<UlidValue, FormatError> {
    base32::decode(text).map(UlidValue::from_u128)
}

/// Encodes a value as 16 bytes: `high` big-endian, then `low` big-endian.
pub fn encode_bytes(value: UlidValue) -> [u8; ULID_BYTES_LEN] {
    let mut bytes = [0u8; ULID_BYTES_LEN];
    bytes[..8].copy_from_slice(&value.high().to_be_bytes());
    bytes[8..].copy_from_slice(&value.low().to_be_bytes());
    bytes
}

/// Decodes a 16-byte big-endian buffer.
///
/// # Errors
///
/// Returns a [`FormatError`] with a bad-length reason if `buffer` is not
/// exactly 16 bytes.
pub fn decode_bytes(buffer: &[u8]) -> Result<UlidValue, FormatError> {
    let Ok(bytes) = <[u8; ULID_BYTES_LEN]>::try_from(buffer) else {
        return Err(FormatError::bad_length(
            FormatInput::Bytes(buffer.to_vec()),
            ULID_BYTES_LEN,
            buffer.len(),
        ));
    };

    let (high, low) = bytes.split_at(8);
    Ok(UlidValue::from_parts(be_u64(high), be_u64(low)))
}

/// Returns the value unchanged. Bound when the target is the native value.
pub fn identity(value: UlidValue) -> UlidValue {
    value
}

fn be_u64(half: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(half);
    u64::from_be_bytes(buf)
}
