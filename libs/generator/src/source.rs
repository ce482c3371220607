//! Suppliers of fresh ULID values.
//!
//! Generation itself is delegated to the `ulid` crate; this module only
//! adapts it to [`UlidValue`].

use std::sync::{Mutex, PoisonError};

use tracing::warn;
use ulidgen_codec::UlidValue;

use crate::error::GenerateError;

/// Produces a new value each time an identifier is needed.
pub trait UlidSource: Send + Sync {
    fn next_ulid(&self) -> Result<UlidValue, GenerateError>;
}

/// Closures make convenient fixed or scripted sources.
impl<F> UlidSource for F
where
    F: Fn() -> UlidValue + Send + Sync,
{
    fn next_ulid(&self) -> Result<UlidValue, GenerateError> {
        Ok(self())
    }
}

/// Current time plus fresh randomness on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl UlidSource for SystemSource {
    fn next_ulid(&self) -> Result<UlidValue, GenerateError> {
        Ok(ulid::Ulid::new().into())
    }
}

/// Strictly increasing values within this process.
///
/// Within one millisecond the random part is incremented instead of
/// re-rolled.
pub struct MonotonicSource {
    generator: Mutex<ulid::Generator>,
}

impl std::fmt::Debug for MonotonicSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonotonicSource").finish_non_exhaustive()
    }
}

impl MonotonicSource {
    pub fn new() -> Self {
        Self {
            generator: Mutex::new(ulid::Generator::new()),
        }
    }
}

impl Default for MonotonicSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UlidSource for MonotonicSource {
    fn next_ulid(&self) -> Result<UlidValue, GenerateError> {
        // The generator holds only the previous value, so a poisoned lock is still usable.
        let mut generator = self
            .generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        generator.generate().map(UlidValue::from).map_err(|e| {
            warn!(error = %e, "monotonic ULID source exhausted");
            GenerateError::SourceExhausted(e.to_string())
        })
    }
}

/// The source selected by [`GeneratorConfig`](crate::GeneratorConfig).
#[derive(Debug)]
pub enum ConfiguredSource {
    System(SystemSource),
    Monotonic(MonotonicSource),
}

impl ConfiguredSource {
    pub fn new(monotonic: bool) -> Self {
        if monotonic {
            ConfiguredSource::Monotonic(MonotonicSource::new())
        } else {
            ConfiguredSource::System(SystemSource)
        }
    }

    pub fn is_monotonic(&self) -> bool {
        matches!(self, ConfiguredSource::Monotonic(_))
    }
}

impl UlidSource for ConfiguredSource {
    fn next_ulid(&self) -> Result<UlidValue, GenerateError> {
        match self {
            ConfiguredSource::System(source) => source.next_ulid(),
            ConfiguredSource::Monotonic(source) => source.next_ulid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_system_source_unique() {
        let source = SystemSource;
        let values: HashSet<_> = (0..1_000).map(|_| source.next_ulid().unwrap()).collect();
        assert_eq!(values.len(), 1_000);
    }

    #[test]
    fn test_system_source_has_current_timestamp() {
        let before = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let value = SystemSource.next_ulid().unwrap();
        assert!(value.timestamp_ms() >= before);
    }

    #[test]
    fn test_monotonic_source_strictly_increasing() {
        let source = MonotonicSource::new();
        let mut previous = source.next_ulid().unwrap();
        for _ in 0..10_000 {
            let next = source.next_ulid().unwrap();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_monotonic_source_across_threads() {
        let source = MonotonicSource::new();
        let mut all: Vec<UlidValue> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..500)
                            .map(|_| source.next_ulid().unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn test_closure_source() {
        let fixed = UlidValue::from_parts(7, 7);
        let source = move || fixed;
        assert_eq!(source.next_ulid().unwrap(), fixed);
    }

    #[test]
    fn test_configured_source() {
        assert!(ConfiguredSource::new(true).is_monotonic());
        assert!(!ConfiguredSource::new(false).is_monotonic());
        assert!(ConfiguredSource::new(false).next_ulid().is_ok());
    }
}
