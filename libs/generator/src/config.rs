//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedKindError;
use crate::representation::RepresentationKind;

/// Environment variable naming the representation kind.
pub const REPRESENTATION_VAR: &str = "ULIDGEN_REPRESENTATION";

/// Environment variable enabling the monotonic source (`1` or `true`).
pub const MONOTONIC_VAR: &str = "ULIDGEN_MONOTONIC";

/// How an identifier field is generated.
///
/// Unknown representation kinds are rejected while the configuration is
/// loaded, whether it comes from the environment or from serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Representation stored in the identifier field.
    #[serde(default)]
    pub representation: RepresentationKind,

    /// Use strictly increasing values instead of independent random ones.
    #[serde(default)]
    pub monotonic: bool,
}

impl GeneratorConfig {
    pub fn new(representation: RepresentationKind) -> Self {
        Self {
            representation,
            monotonic: false,
        }
    }

    #[must_use]
    pub fn with_monotonic(mut self, monotonic: bool) -> Self {
        self.monotonic = monotonic;
        self
    }

    pub fn from_env() -> Result<Self, UnsupportedKindError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UnsupportedKindError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let representation = match lookup(REPRESENTATION_VAR) {
            Some(kind) => kind.parse()?,
            None => RepresentationKind::default(),
        };

        let monotonic = lookup(MONOTONIC_VAR)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            representation,
            monotonic,
        })
    }
}
