// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! In-process property registry for host runs.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::{validate_key, validate_value, PropertyError, PropertyStore};

/// Property store kept entirely in memory.
///
/// Every accepted write is also appended to a journal so callers can inspect
/// the order in which keys were published.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    values: BTreeMap<String, String>,
    journal: Vec<(String, String)>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `properties`. Seeding is not journaled.
    pub fn with_properties<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: Mutex::new(Inner {
                values,
                journal: Vec::new(),
            }),
        }
    }

    /// Returns a copy of every property currently held.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner.lock().values.clone()
    }

    /// Returns the writes performed through [`PropertyStore::set`], oldest first.
    pub fn journal(&self) -> Vec<(String, String)> {
        self.inner.lock().journal.clone()
    }
}

impl PropertyStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PropertyError> {
        validate_key(key)?;
        Ok(self.inner.lock().values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PropertyError> {
        validate_key(key)?;
        validate_value(key, value)?;
        let mut inner = self.inner.lock();
        inner.values.insert(key.to_string(), value.to_string());
        inner.journal.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
