//! The ULID value type.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::FormatError;

/// Bits of the timestamp segment.
const TIMESTAMP_BITS: u32 = 48;

/// Bits of the random segment.
const RANDOM_BITS: u32 = 80;

const RANDOM_MASK: u128 = (1 << RANDOM_BITS) - 1;

/// A 128-bit ULID, viewed as a `high`/`low` pair of 64-bit halves.
///
/// Ordering follows the 128-bit integer, which is also the ordering of the
/// canonical strings.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UlidValue(u128);

impl UlidValue {
    /// The all-zero value.
    pub const NIL: Self = Self(0);

    /// Builds a value from its most and least significant halves.
    #[must_use]
    pub const fn from_parts(high: u64, low: u64) -> Self {
        Self(((high as u128) << 64) | low as u128)
    }

    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn nil() -> Self {
        Self::NIL
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.0 == 0
    }

    /// Most significant 64 bits.
    #[must_use]
    pub const fn high(&self) -> u64 {
        (self.0 >> 64) as u64
    }

    /// Least significant 64 bits.
    #[must_use]
    pub const fn low(&self) -> u64 {
        self.0 as u64
    }

    #[must_use]
    pub const fn parts(&self) -> (u64, u64) {
        (self.high(), self.low())
    }

    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// Milliseconds since the Unix epoch carried in the upper 48 bits.
    #[must_use]
    pub const fn timestamp_ms(&self) -> u64 {
        (self.0 >> RANDOM_BITS) as u64
    }

    /// The lower 80 random bits.
    #[must_use]
    pub const fn random(&self) -> u128 {
        self.0 & RANDOM_MASK
    }

    /// Big-endian bytes: `high` then `low`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 16] {
        codec::encode_bytes(*self)
    }
}

// Keeps the timestamp/random split honest.
const _: () = assert!(TIMESTAMP_BITS + RANDOM_BITS == 128);

impl fmt::Display for UlidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode_string(*self))
    }
}

impl fmt::Debug for UlidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UlidValue")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl FromStr for UlidValue {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode_string(s)
    }
}

impl From<u128> for UlidValue {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<UlidValue> for u128 {
    fn from(value: UlidValue) -> Self {
        value.0
    }
}

impl From<(u64, u64)> for UlidValue {
    fn from((high, low): (u64, u64)) -> Self {
        Self::from_parts(high, low)
    }
}

impl From<[u8; 16]> for UlidValue {
    fn from(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }
}

impl From<UlidValue> for [u8; 16] {
    fn from(value: UlidValue) -> Self {
        value.to_bytes()
    }
}

impl TryFrom<&[u8]> for UlidValue {
    type Error = FormatError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        codec::decode_bytes(bytes)
    }
}

impl From<ulid::Ulid> for UlidValue {
    fn from(ulid: ulid::Ulid) -> Self {
        Self(ulid.0)
    }
}

impl From<UlidValue> for ulid::Ulid {
    fn from(value: UlidValue) -> Self {
        ulid::Ulid(value.0)
    }
}

impl From<uuid::Uuid> for UlidValue {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid.as_u128())
    }
}

impl From<UlidValue> for uuid::Uuid {
    fn from(value: UlidValue) -> Self {
        uuid::Uuid::from_u128(value.0)
    }
}

impl serde::Serialize for UlidValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&codec::encode_string(*self))
    }
}

impl<'de> serde::Deserialize<'de> for UlidValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        codec::decode_string(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: UlidValue = UlidValue::from_parts(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);

    #[test]
    fn test_parts_roundtrip() {
        assert_eq!(SAMPLE.high(), 0x0123_4567_89AB_CDEF);
        assert_eq!(SAMPLE.low(), 0xFEDC_BA98_7654_3210);
        assert_eq!(
            SAMPLE.as_u128(),
            0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210
        );
        assert_eq!(UlidValue::from(SAMPLE.parts()), SAMPLE);
    }

    #[test]
    fn test_timestamp_and_random_split() {
        let value = UlidValue::from_u128((1_700_000_000_000u128 << 80) | 42);
        assert_eq!(value.timestamp_ms(), 1_700_000_000_000);
        assert_eq!(value.random(), 42);
    }

    #[test]
    fn test_nil() {
        assert!(UlidValue::nil().is_nil());
        assert_eq!(UlidValue::default(), UlidValue::NIL);
        assert!(!SAMPLE.is_nil());
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(SAMPLE.to_string(), "014D2PF2DBSQQZXQ5TK1V58CGG");
        let parsed: UlidValue = "014d2pf2dbsqqzxq5tk1v58cgg".parse().unwrap();
        assert_eq!(parsed, SAMPLE);
    }

    #[test]
    fn test_debug_shows_canonical_form() {
        assert_eq!(
            format!("{:?}", SAMPLE),
            "UlidValue(014D2PF2DBSQQZXQ5TK1V58CGG)"
        );
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let a = UlidValue::from_parts(1, u64::MAX);
        let b = UlidValue::from_parts(2, 0);
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_ulid_crate_interop() {
        let external = ulid::Ulid::new();
        let value = UlidValue::from(external);
        assert_eq!(value.to_string(), external.to_string());
        assert_eq!(ulid::Ulid::from(value), external);
        assert_eq!(value.timestamp_ms(), external.timestamp_ms());
    }

    #[test]
    fn test_uuid_interop() {
        let uuid = uuid::Uuid::from(SAMPLE);
        assert_eq!(uuid.as_bytes(), &SAMPLE.to_bytes());
        assert_eq!(UlidValue::from(uuid), SAMPLE);
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = SAMPLE.to_bytes();
        assert_eq!(UlidValue::try_from(&bytes[..]).unwrap(), SAMPLE);
        assert!(UlidValue::try_from(&bytes[..15]).unwrap_err().is_bad_length());
    }

    #[test]
    fn test_json_roundtrip() {
        let json = serde_json::to_string(&SAMPLE).unwrap();
        assert_eq!(json, "\"014D2PF2DBSQQZXQ5TK1V58CGG\"");
        let parsed: UlidValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SAMPLE);
    }

    #[test]
    fn test_json_rejects_malformed() {
        let result: Result<UlidValue, _> = serde_json::from_str("\"not-a-ulid\"");
        assert!(result.is_err());
    }
}
