use async_trait::async_trait;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{Store, StoreError};
use crate::models::Entity;

/// In-process store, ordered by identifier.
///
/// Backs `STORE_BACKEND=memory` and the test suites. Each operation holds the
/// lock for its whole check-and-write, which makes update and delete atomic
/// against each other.
pub struct MemoryStore<E: Entity> {
    records: RwLock<BTreeMap<E::Key, E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(collection: &str) -> StoreError {
    StoreError::Backend(format!("{} store lock poisoned", collection))
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryStore<E> {
    async fn find_by_id(&self, id: &E::Key) -> Result<Option<E>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned(E::COLLECTION))?;
        Ok(records.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned(E::COLLECTION))?;
        Ok(records.values().cloned().collect())
    }

    async fn insert(&self, entity: &E) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned(E::COLLECTION))?;
        match records.entry(entity.id().clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(entity.clone());
                Ok(true)
            }
        }
    }

    async fn replace(&self, entity: &E) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned(E::COLLECTION))?;
        match records.get_mut(entity.id()) {
            Some(current) => {
                *current = entity.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &E::Key) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned(E::COLLECTION))?;
        Ok(records.remove(id).is_some())
    }
}
