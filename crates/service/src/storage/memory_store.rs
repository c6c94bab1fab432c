use std::collections::BTreeMap;

use tokio::sync::Mutex;

/// In-memory map keyed by an auto-incrementing `u64`.
///
/// Every operation takes the single exclusive lock for its whole duration, so
/// calls on one store are linearised. IDs start at 0, only ever grow, and are
/// never handed out again after a removal. Records leave the store as clones.
pub struct MemoryStore<V> {
    inner: Mutex<Inner<V>>,
}

struct Inner<V> {
    entries: BTreeMap<u64, V>,
    next_id: u64,
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MemoryStore<V> {
    pub fn new() -> Self {
        Self { inner: Mutex::new(Inner { entries: BTreeMap::new(), next_id: 0 }) }
    }

    /// Allocate the next ID, build the record for it and insert it.
    pub async fn insert_with<F>(&self, build: F) -> u64
    where
        F: FnOnce(u64) -> V,
    {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.entries.insert(id, build(id));
        inner.next_id += 1;
        id
    }

    /// Mutate a record in place; returns whether it existed.
    pub async fn update_with<F>(&self, id: u64, apply: F) -> bool
    where
        F: FnOnce(&mut V),
    {
        let mut inner = self.inner.lock().await;
        match inner.entries.get_mut(&id) {
            Some(entry) => {
                apply(entry);
                true
            }
            None => false,
        }
    }

    /// Remove a record; returns whether it existed.
    pub async fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.lock().await;
        inner.entries.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<V: Clone> MemoryStore<V> {
    /// Snapshot of every record, ascending by ID.
    pub async fn list(&self) -> Vec<V> {
        let inner = self.inner.lock().await;
        inner.entries.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Option<V> {
        let inner = self.inner.lock().await;
        inner.entries.get(&id).cloned()
    }
}
