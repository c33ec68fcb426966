use std::collections::HashMap;

use super::ObjectStore;
use crate::object::Id;
use crate::{Error, Result};

/// In-memory, `HashMap`-based object store.
///
/// Intended for tests and embedding. Holds the same compressed bytes
/// the on-disk store would write.
#[derive(Debug, Default)]
pub struct InMemory {
    objects: HashMap<Id, Vec<u8>>,
}

impl InMemory {
    /// Create a new empty in-memory store.
    pub fn new() -> InMemory {
        InMemory::default()
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Return a sorted list of all object IDs in the store.
    pub fn ids(&self) -> Vec<Id> {
        let mut ids: Vec<Id> = self.objects.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl ObjectStore for InMemory {
    fn put(&mut self, id: &Id, compressed: &[u8]) -> Result<()> {
        self.objects
            .entry(*id)
            .or_insert_with(|| compressed.to_vec());
        Ok(())
    }

    fn get(&self, id: &Id) -> Result<Vec<u8>> {
        self.objects
            .get(id)
            .cloned()
            .ok_or(Error::ObjectNotFound(*id))
    }

    fn exists(&self, id: &Id) -> bool {
        self.objects.contains_key(id)
    }
}
