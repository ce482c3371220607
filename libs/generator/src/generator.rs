//! Identifier generation for a configured field.

use tracing::{debug, trace};
use ulidgen_codec::UlidValue;

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, ParseError};
use crate::representation::Representation;
use crate::selector::SelectorHandle;
use crate::source::{ConfiguredSource, UlidSource};

/// Produces identifiers for one field in its configured representation.
#[derive(Debug)]
pub struct IdGenerator<S = ConfiguredSource> {
    handle: SelectorHandle,
    source: S,
}

impl IdGenerator<ConfiguredSource> {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        debug!(
            representation = %config.representation,
            monotonic = config.monotonic,
            "configuring ULID id generator"
        );
        Self::new(
            SelectorHandle::for_kind(config.representation),
            ConfiguredSource::new(config.monotonic),
        )
    }
}

impl<S: UlidSource> IdGenerator<S> {
    pub fn new(handle: SelectorHandle, source: S) -> Self {
        Self { handle, source }
    }

    pub fn handle(&self) -> &SelectorHandle {
        &self.handle
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns `existing` untouched if the entity already has an identifier,
    /// otherwise a fresh one in the configured representation.
    pub fn generate(
        &self,
        existing: Option<Representation>,
    ) -> Result<Representation, GenerateError> {
        if let Some(id) = existing {
            trace!(id = %id, "identifier already assigned");
            return Ok(id);
        }

        let value = self.source.next_ulid()?;
        let id = self.handle.transform(value);
        trace!(id = %id, kind = %self.handle.kind(), "generated identifier");
        Ok(id)
    }

    /// Generates `count` fresh identifiers.
    pub fn generate_batch(&self, count: usize) -> Result<Vec<Representation>, GenerateError> {
        (0..count).map(|_| self.generate(None)).collect()
    }

    /// Reads a stored identifier back into a value.
    pub fn parse(&self, repr: &Representation) -> Result<UlidValue, ParseError> {
        self.handle.parse(repr)
    }
}
