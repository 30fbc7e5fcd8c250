//! Stream registry
//!
//! Maps stream name to implementation. Built once during process
//! initialization, read-only afterwards; the engine receives it by
//! reference.

use super::Stream;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Append-only collection of registered streams, keyed by name.
///
/// Iteration order is name order, which makes discovery output
/// deterministic across runs.
#[derive(Default)]
pub struct Registry {
    streams: BTreeMap<String, Arc<dyn Stream>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stream, keyed by its declared name.
    ///
    /// # Panics
    ///
    /// Panics if a stream with the same name is already registered. Stream
    /// names are a programming-time invariant; the process must not start
    /// with an ambiguous registry.
    pub fn register(&mut self, stream: Arc<dyn Stream>) {
        let name = stream.describe().stream;
        assert!(
            !self.streams.contains_key(&name),
            "stream already registered: {name}"
        );
        self.streams.insert(name, stream);
    }

    /// Look up a stream by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Stream>> {
        self.streams.get(name).cloned()
    }

    /// Iterate all registered streams in name order
    pub fn all(&self) -> impl Iterator<Item = (&str, &Arc<dyn Stream>)> {
        self.streams.iter().map(|(name, stream)| (name.as_str(), stream))
    }

    /// Number of registered streams
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}
