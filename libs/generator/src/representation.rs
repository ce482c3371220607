//! Representation kinds and the values they produce.

use std::fmt;
use std::str::FromStr;

use ulidgen_codec::UlidValue;

use crate::error::UnsupportedKindError;

/// The shape an identifier field stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RepresentationKind {
    /// The [`UlidValue`] itself.
    Native,
    /// The canonical 26-character string.
    #[default]
    String,
    /// The 16-byte big-endian buffer.
    Bytes,
}

impl RepresentationKind {
    /// Every supported kind.
    pub const ALL: [RepresentationKind; 3] = [
        RepresentationKind::Native,
        RepresentationKind::String,
        RepresentationKind::Bytes,
    ];

    /// The canonical configuration name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RepresentationKind::Native => "native",
            RepresentationKind::String => "string",
            RepresentationKind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepresentationKind {
    type Err = UnsupportedKindError;

    /// Accepts the canonical names plus the column-type aliases used in
    /// mapping files (`ulid`, `text`, `varchar`, `binary`, `bytea`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" | "ulid" => Ok(RepresentationKind::Native),
            "string" | "text" | "varchar" => Ok(RepresentationKind::String),
            "bytes" | "binary" | "bytea" => Ok(RepresentationKind::Bytes),
            _ => Err(UnsupportedKindError {
                requested_kind: s.to_string(),
            }),
        }
    }
}

impl serde::Serialize for RepresentationKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for RepresentationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An identifier in one of the supported representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Representation {
    Native(UlidValue),
    Text(String),
    /// Big-endian buffer as read from storage; length is checked on parse.
    Bytes(Vec<u8>),
}

impl Representation {
    pub fn kind(&self) -> RepresentationKind {
        match self {
            Representation::Native(_) => RepresentationKind::Native,
            Representation::Text(_) => RepresentationKind::String,
            Representation::Bytes(_) => RepresentationKind::Bytes,
        }
    }

    pub fn as_native(&self) -> Option<UlidValue> {
        match self {
            Representation::Native(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Representation::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Representation::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// Native values and text render as the canonical string; bytes as
/// lowercase hex.
impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Native(value) => write!(f, "{}", value),
            Representation::Text(text) => f.write_str(text),
            Representation::Bytes(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

impl From<UlidValue> for Representation {
    fn from(value: UlidValue) -> Self {
        Representation::Native(value)
    }
}

impl From<String> for Representation {
    fn from(text: String) -> Self {
        Representation::Text(text)
    }
}

impl From<[u8; 16]> for Representation {
    fn from(bytes: [u8; 16]) -> Self {
        Representation::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Representation {
    fn from(bytes: Vec<u8>) -> Self {
        Representation::Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("native", RepresentationKind::Native)]
    #[case("ULID", RepresentationKind::Native)]
    #[case("string", RepresentationKind::String)]
    #[case(" Text ", RepresentationKind::String)]
    #[case("varchar", RepresentationKind::String)]
    #[case("bytes", RepresentationKind::Bytes)]
    #[case("BINARY", RepresentationKind::Bytes)]
    #[case("bytea", RepresentationKind::Bytes)]
    fn test_kind_from_str(#[case] input: &str, #[case] expected: RepresentationKind) {
        assert_eq!(input.parse::<RepresentationKind>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("uuid")]
    #[case("long")]
    #[case("byte[]")]
    fn test_kind_unsupported(#[case] input: &str) {
        let err = input.parse::<RepresentationKind>().unwrap_err();
        assert_eq!(err.requested_kind, input);
    }

    #[test]
    fn test_kind_display_roundtrip() {
        for kind in RepresentationKind::ALL {
            assert_eq!(kind.to_string().parse::<RepresentationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_json() {
        let json = serde_json::to_string(&RepresentationKind::Bytes).unwrap();
        assert_eq!(json, "\"bytes\"");
        let parsed: RepresentationKind = serde_json::from_str("\"binary\"").unwrap();
        assert_eq!(parsed, RepresentationKind::Bytes);
        assert!(serde_json::from_str::<RepresentationKind>("\"blob\"").is_err());
    }

    #[test]
    fn test_representation_kind_and_accessors() {
        let value = UlidValue::from_parts(0, 1);
        let native = Representation::from(value);
        assert_eq!(native.kind(), RepresentationKind::Native);
        assert_eq!(native.as_native(), Some(value));
        assert_eq!(native.as_text(), None);

        let text = Representation::from(value.to_string());
        assert_eq!(text.kind(), RepresentationKind::String);
        assert_eq!(text.as_text(), Some("00000000000000000000000001"));

        let bytes = Representation::from(value.to_bytes());
        assert_eq!(bytes.kind(), RepresentationKind::Bytes);
        assert_eq!(bytes.as_bytes(), Some(&value.to_bytes()[..]));
    }

    #[test]
    fn test_representation_display() {
        let value = UlidValue::from_parts(0, 0xFF);
        assert_eq!(
            Representation::Native(value).to_string(),
            "0000000000000000000000007Z"
        );
        assert_eq!(
            Representation::from(value.to_bytes()).to_string(),
            "000000000000000000000000000000ff"
        );
    }
}
