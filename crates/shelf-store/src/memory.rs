use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shelf_types::{Resource, ResourceKey};

use crate::error::{StoreError, StoreResult};
use crate::traits::ResourceStore;

/// In-memory, HashMap-based resource store.
///
/// One `RwLock` guards the whole map: every write across every package and
/// type contends on it, while reads share it. Resources are cloned on read
/// and write. Data is lost when the store is dropped.
pub struct InMemoryResourceStore {
    resources: RwLock<HashMap<ResourceKey, Resource>>,
}

impl InMemoryResourceStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
        }
    }

    /// Number of resources currently stored, across all types.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_map()?.len())
    }

    /// Returns `true` if the store holds no resources.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_map()?.is_empty())
    }

    fn read_map(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<ResourceKey, Resource>>> {
        self.resources
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write_map(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<ResourceKey, Resource>>> {
        self.resources
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl Default for InMemoryResourceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceStore for InMemoryResourceStore {
    fn list(&self, package: &str, resource_type: &str) -> StoreResult<Vec<Resource>> {
        let map = self.read_map()?;
        let mut matches: Vec<(&ResourceKey, &Resource)> = map
            .iter()
            .filter(|(key, _)| key.is_in(package, resource_type))
            .collect();
        matches.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(matches.into_iter().map(|(_, r)| r.clone()).collect())
    }

    fn create(&self, resource: &Resource) -> StoreResult<()> {
        let key = resource.key();
        let mut map = self.write_map()?;
        match map.entry(key) {
            Entry::Occupied(slot) => Err(StoreError::AlreadyExists(slot.key().clone())),
            Entry::Vacant(slot) => {
                tracing::trace!(key = %slot.key(), "create");
                slot.insert(resource.clone());
                Ok(())
            }
        }
    }

    fn get(&self, package: &str, resource_type: &str, name: &str) -> StoreResult<Resource> {
        let key = ResourceKey::new(package, resource_type, name);
        let map = self.read_map()?;
        map.get(&key).cloned().ok_or(StoreError::NotFound(key))
    }

    fn update(&self, resource: &Resource) -> StoreResult<()> {
        let key = resource.key();
        let mut map = self.write_map()?;
        match map.get_mut(&key) {
            Some(slot) => {
                tracing::trace!(key = %key, "update");
                *slot = resource.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(key)),
        }
    }

    fn delete(&self, package: &str, resource_type: &str, name: &str) -> StoreResult<()> {
        let key = ResourceKey::new(package, resource_type, name);
        let mut map = self.write_map()?;
        match map.remove(&key) {
            Some(_) => {
                tracing::trace!(key = %key, "delete");
                Ok(())
            }
            None => Err(StoreError::NotFound(key)),
        }
    }
}

impl std::fmt::Debug for InMemoryResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.read_map().map(|m| m.len()).unwrap_or_default();
        f.debug_struct("InMemoryResourceStore")
            .field("resource_count", &count)
            .finish()
    }
}
