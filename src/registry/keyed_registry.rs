//! # Keyed Registry
//!
//! Ordered string-keyed catalog with an optional modifiable mode.

use crate::error::{Result, StatsError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_entries: usize,
    pub modifiable: bool,
}

/// String-keyed registry that remembers registration order.
///
/// Entries are handed out as `Arc<T>`, so the value returned by
/// [`Registry::register`] is the same allocation every later
/// [`Registry::get`] returns.
#[derive(Debug)]
pub struct Registry<T> {
    entries: HashMap<String, Arc<T>>,
    order: Vec<String>,
    modifiable: bool,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    /// Registry that rejects duplicate keys
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            modifiable: false,
        }
    }

    /// Registry where re-registering a key replaces the old entry
    pub fn modifiable() -> Self {
        Self {
            modifiable: true,
            ..Self::new()
        }
    }

    /// Register `value` under `key`.
    ///
    /// Fails with [`StatsError::DuplicateKey`] when the key is taken and the
    /// registry is not modifiable. A replaced key keeps its original position.
    pub fn register(&mut self, key: impl Into<String>, value: T) -> Result<Arc<T>> {
        let key = key.into();
        let value = Arc::new(value);

        if self.entries.contains_key(&key) {
            if !self.modifiable {
                return Err(StatsError::duplicate_key(key));
            }
            debug!(key = %key, "Replacing registry entry");
        } else {
            self.order.push(key.clone());
        }

        self.entries.insert(key, Arc::clone(&value));
        Ok(value)
    }

    /// Look up an entry; unknown keys are `None`, never an error
    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        self.entries.get(key).cloned()
    }

    /// Reverse lookup of the key an entry is currently registered under
    pub fn key_of(&self, value: &Arc<T>) -> Option<&str> {
        self.order
            .iter()
            .find(|key| {
                self.entries
                    .get(key.as_str())
                    .is_some_and(|entry| Arc::ptr_eq(entry, value))
            })
            .map(String::as_str)
    }

    /// Every key in registration order
    pub fn all_ids(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<T>)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|value| (key.as_str(), value)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            total_entries: self.len(),
            modifiable: self.modifiable,
        }
    }
}
