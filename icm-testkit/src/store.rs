//! An in-memory store backing the mock host

use alloc::collections::BTreeMap;

use icm_core::host::Store;
use icm_primitives::prelude::*;

/// A plain map-backed [`Store`].
///
/// Every write is immediately durable; transactionality, where a test needs
/// it, comes from the overlays the engine itself layers on top.
#[derive(Clone, Debug, Default)]
pub struct MemStore(BTreeMap<Vec<u8>, Vec<u8>>);

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Store for MemStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.0.insert(key.to_vec(), value.to_vec());
    }

    fn has(&self, key: &[u8]) -> bool {
        self.0.contains_key(key)
    }
}
