//! Exchange registry
//!
//! An explicit map from identifier to zero-argument factory, built at
//! startup from the compiled-in catalog. Replaces reflective by-name
//! attribute lookup: resolution failures are a normal error variant, not
//! a reflection exception.

use std::collections::BTreeMap;

use crate::error::{DumpError, DumpResult};
use crate::exchanges::{self, Exchange};

/// Constructs one exchange instance; instantiation itself cannot fail,
/// failures surface from `describe()`.
pub type Factory = fn() -> Box<dyn Exchange>;

pub struct ExchangeRegistry {
    // BTreeMap keeps batch iteration order deterministic
    factories: BTreeMap<String, Factory>,
}

impl ExchangeRegistry {
    pub fn new() -> Self {
        Self { factories: BTreeMap::new() }
    }

    /// Registry over the built-in venue catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (id, factory) in exchanges::catalog() {
            registry.register(id, factory);
        }
        registry
    }

    pub fn register(&mut self, id: impl Into<String>, factory: Factory) {
        self.factories.insert(id.into(), factory);
    }

    /// All known identifiers, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn resolve(&self, id: &str) -> DumpResult<Box<dyn Exchange>> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| DumpError::Resolution(id.to_string()))?;
        Ok(factory())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ExchangeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_resolves_every_id() {
        let registry = ExchangeRegistry::builtin();
        assert!(!registry.is_empty());
        for id in registry.ids() {
            let exchange = registry.resolve(id).unwrap();
            assert_eq!(exchange.id(), id);
        }
    }

    #[test]
    fn test_unknown_id_is_a_resolution_error() {
        let registry = ExchangeRegistry::builtin();
        // .err() instead of unwrap_err: Box<dyn Exchange> has no Debug impl
        let err = registry.resolve("doesnotexist").err().unwrap();
        assert!(matches!(err, DumpError::Resolution(ref id) if id == "doesnotexist"));
    }

    #[test]
    fn test_ids_are_sorted() {
        let registry = ExchangeRegistry::builtin();
        let ids: Vec<_> = registry.ids().collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
