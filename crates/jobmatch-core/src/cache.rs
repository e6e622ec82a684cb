//! In-memory memoization of definition lookups.
//!
//! The taxonomy service is asked about the same SSYK codes over and over
//! across searches. [`CachedDefinitions`] wraps any [`DefinitionSource`]
//! with a code-keyed map so each distinct code hits the wire once per
//! wrapper lifetime. The cache is explicit and injectable: callers decide
//! whether and how long to keep one around.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::taxonomy::DefinitionSource;

/// A memoizing wrapper around a [`DefinitionSource`].
#[derive(Debug)]
pub struct CachedDefinitions<S> {
    inner: S,
    entries: Mutex<HashMap<String, String>>,
}

impl<S> CachedDefinitions<S> {
    /// Wrap a source with an empty cache.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached codes.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether the cache holds no entries yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: DefinitionSource> DefinitionSource for CachedDefinitions<S> {
    fn lookup(&self, ssyk_code: &str) -> String {
        if let Some(definition) = self
            .entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(ssyk_code)
        {
            return definition.clone();
        }

        // Not held across the inner lookup; a slow fetch must not block
        // cache reads for other codes.
        let definition = self.inner.lookup(ssyk_code);
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(ssyk_code.to_string(), definition.clone());
        definition
    }
}
