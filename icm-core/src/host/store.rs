//! Defines the key-value store abstraction consumed by the engine

use alloc::collections::BTreeMap;

use icm_primitives::prelude::*;

/// A transaction-scoped key-value store.
///
/// The engine never sees the storage engine's tree structure; everything it
/// persists goes through get/set/has by byte-string key. Writes are durable
/// only if the enclosing transaction commits.
pub trait Store {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;
    fn set(&mut self, key: &[u8], value: &[u8]);
    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }
}

impl<S: Store + ?Sized> Store for &mut S {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        (**self).set(key, value)
    }

    fn has(&self, key: &[u8]) -> bool {
        (**self).has(key)
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        (**self).set(key, value)
    }

    fn has(&self, key: &[u8]) -> bool {
        (**self).has(key)
    }
}

/// A view over a parent store that prepends a fixed prefix to every key.
///
/// Queues and counters for different channels and chains live under
/// disjoint prefixes of one underlying store and must never collide.
pub struct PrefixStore<S> {
    parent: S,
    prefix: Vec<u8>,
}

impl<S: Store> PrefixStore<S> {
    pub fn new(parent: S, prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            parent,
            prefix: prefix.into(),
        }
    }

    fn full_key(&self, key: &[u8]) -> Vec<u8> {
        let mut full = self.prefix.clone();
        full.extend_from_slice(key);
        full
    }
}

impl<S: Store> Store for PrefixStore<S> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.parent.get(&self.full_key(key))
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.parent.set(&self.full_key(key), value)
    }

    fn has(&self, key: &[u8]) -> bool {
        self.parent.has(&self.full_key(key))
    }
}

/// A copy-on-write overlay over a parent store.
///
/// Writes buffer in memory and are invisible to the parent until
/// [`CacheStore::commit`] flushes them, exactly once. Dropping the overlay
/// (or calling [`CacheStore::discard`]) has no observable effect on the
/// parent.
pub struct CacheStore<S> {
    parent: S,
    writes: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl<S: Store> CacheStore<S> {
    pub fn new(parent: S) -> Self {
        Self {
            parent,
            writes: BTreeMap::new(),
        }
    }

    /// Flushes the buffered writes into the parent store.
    pub fn commit(mut self) {
        for (key, value) in core::mem::take(&mut self.writes) {
            self.parent.set(&key, &value);
        }
    }

    /// Drops the buffered writes.
    pub fn discard(self) {}
}

impl<S: Store> Store for CacheStore<S> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.writes.get(key) {
            Some(value) => Some(value.clone()),
            None => self.parent.get(key),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.writes.insert(key.to_vec(), value.to_vec());
    }

    fn has(&self, key: &[u8]) -> bool {
        self.writes.contains_key(key) || self.parent.has(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Mem(BTreeMap<Vec<u8>, Vec<u8>>);

    impl Store for Mem {
        fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &[u8], value: &[u8]) {
            self.0.insert(key.to_vec(), value.to_vec());
        }
    }

    #[test]
    fn prefixed_views_are_disjoint() {
        let mut mem = Mem::default();

        PrefixStore::new(&mut mem, "a/").set(b"k", b"1");
        PrefixStore::new(&mut mem, "b/").set(b"k", b"2");

        assert_eq!(PrefixStore::new(&mut mem, "a/").get(b"k"), Some(b"1".to_vec()));
        assert_eq!(PrefixStore::new(&mut mem, "b/").get(b"k"), Some(b"2".to_vec()));
    }

    #[test]
    fn overlay_writes_are_invisible_until_commit() {
        let mut mem = Mem::default();
        mem.set(b"k", b"old");

        let mut cache = CacheStore::new(&mut mem);
        cache.set(b"k", b"new");
        cache.set(b"fresh", b"v");
        assert_eq!(cache.get(b"k"), Some(b"new".to_vec()));

        cache.commit();
        assert_eq!(mem.get(b"k"), Some(b"new".to_vec()));
        assert_eq!(mem.get(b"fresh"), Some(b"v".to_vec()));
    }

    #[test]
    fn discarded_overlay_has_no_observable_effect() {
        let mut mem = Mem::default();
        mem.set(b"k", b"old");

        let mut cache = CacheStore::new(&mut mem);
        cache.set(b"k", b"new");
        cache.discard();

        assert_eq!(mem.get(b"k"), Some(b"old".to_vec()));
        assert!(!mem.has(b"fresh"));
    }
}
