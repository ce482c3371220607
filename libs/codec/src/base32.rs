//! Crockford base32 as used by the ULID string form.
//!
//! 26 symbols of 5 bits each carry 130 bits, so the leading symbol only
//! ever holds the top 3 bits of the value and must be in `0..=7`.

use crate::error::{FormatError, FormatInput};
use crate::ULID_STRING_LEN;

/// The 32-symbol alphabet. `I`, `L`, `O` and `U` are excluded.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Marker for bytes outside the alphabet in [`DECODE_TABLE`].
const INVALID: u8 = 0xFF;

/// Largest digit allowed in the leading position.
const MAX_LEADING_DIGIT: u8 = 7;

/// Byte to digit lookup, both cases. Built at compile time.
static DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        let symbol = ALPHABET[i];
        table[symbol as usize] = i as u8;
        table[symbol.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encodes a 128-bit value as 26 uppercase ASCII symbols, zero-padded.
pub fn encode(value: u128) -> [u8; ULID_STRING_LEN] {
    let mut out = [ALPHABET[0]; ULID_STRING_LEN];
    let mut rest = value;
    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(rest & 0x1F) as usize];
        rest >>= 5;
    }
    out
}

/// Decodes 26 base32 symbols (either case) into a 128-bit value.
///
/// Length is counted in characters, so non-ASCII input of the right
/// length is reported as a bad character rather than a bad length.
pub fn decode(text: &str) -> Result<u128, FormatError> {
    let len = text.chars().count();
    if len != ULID_STRING_LEN {
        return Err(FormatError::bad_length(
            FormatInput::Text(text.to_string()),
            ULID_STRING_LEN,
            len,
        ));
    }

    let mut value: u128 = 0;
    for (position, character) in text.chars().enumerate() {
        let digit = digit_of(character);
        // A leading symbol above 7 would need a 129th bit.
        if digit == INVALID || (position == 0 && digit > MAX_LEADING_DIGIT) {
            return Err(FormatError::bad_character(text, position, character));
        }
        value = (value << 5) | u128::from(digit);
    }

    Ok(value)
}

fn digit_of(character: char) -> u8 {
    if character.is_ascii() {
        DECODE_TABLE[character as usize]
    } else {
        INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatErrorReason;

    fn is_valid_symbol(character: char) -> bool {
        digit_of(character) != INVALID
    }

    #[test]
    fn test_alphabet_excludes_ambiguous_letters() {
        for c in ['I', 'L', 'O', 'U', 'i', 'l', 'o', 'u'] {
            assert!(!is_valid_symbol(c), "{c} must not be in the alphabet");
        }
        assert_eq!(ALPHABET.len(), 32);
    }

    #[test]
    fn test_decode_table_matches_alphabet() {
        for (i, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(DECODE_TABLE[symbol as usize] as usize, i);
            assert_eq!(DECODE_TABLE[symbol.to_ascii_lowercase() as usize] as usize, i);
        }
    }

    #[test]
    fn test_encode_zero_is_all_zero_symbols() {
        assert_eq!(&encode(0), b"00000000000000000000000000");
    }

    #[test]
    fn test_encode_max() {
        assert_eq!(&encode(u128::MAX), b"7ZZZZZZZZZZZZZZZZZZZZZZZZZ");
    }

    #[test]
    fn test_encode_small_value_is_zero_padded() {
        assert_eq!(&encode(1), b"00000000000000000000000001");
        assert_eq!(&encode(32), b"00000000000000000000000010");
    }

    #[test]
    fn test_decode_max() {
        assert_eq!(decode("7ZZZZZZZZZZZZZZZZZZZZZZZZZ").unwrap(), u128::MAX);
    }

    #[test]
    fn test_decode_rejects_leading_overflow() {
        let err = decode("80000000000000000000000000").unwrap_err();
        assert_eq!(
            err.reason,
            FormatErrorReason::BadCharacter {
                position: 0,
                character: '8'
            }
        );
    }

    #[test]
    fn test_decode_reports_first_bad_position() {
        let err = decode("0000000000000000000000U000").unwrap_err();
        assert_eq!(
            err.reason,
            FormatErrorReason::BadCharacter {
                position: 22,
                character: 'U'
            }
        );
    }

    #[test]
    fn test_decode_non_ascii_is_bad_character() {
        let err = decode("0000000000000000000000000é").unwrap_err();
        assert!(err.is_bad_character());
    }

    #[test]
    fn test_decode_length_counts_characters() {
        let err = decode("00000000000000000000000000é").unwrap_err();
        assert_eq!(
            err.reason,
            FormatErrorReason::BadLength {
                expected: 26,
                actual: 27
            }
        );
    }
}
