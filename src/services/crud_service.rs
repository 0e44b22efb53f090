//! Existence-gated access to an entity store.
//!
//! The only checked failures are `AlreadyExists` on create and `NotFound` on
//! read, update and delete. Each check is the store's own conditional write,
//! so a concurrent delete can never be undone by an update.

use std::sync::Arc;
use thiserror::Error;

use crate::models::Entity;
use crate::store::{Store, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    fn already_exists<E: Entity>(id: &E::Key) -> Self {
        ServiceError::AlreadyExists {
            entity: E::NAME,
            id: id.to_string(),
        }
    }

    fn not_found<E: Entity>(id: &E::Key) -> Self {
        ServiceError::NotFound {
            entity: E::NAME,
            id: id.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct CrudService<E: Entity> {
    store: Arc<dyn Store<E>>,
}

impl<E: Entity> CrudService<E> {
    pub fn new(store: Arc<dyn Store<E>>) -> Self {
        Self { store }
    }

    pub async fn create(&self, entity: E) -> Result<E, ServiceError> {
        if !self.store.insert(&entity).await? {
            log::warn!("⚠️ {} {} already exists", E::NAME, entity.id());
            return Err(ServiceError::already_exists::<E>(entity.id()));
        }

        log::info!("✅ Created {} {}", E::NAME, entity.id());
        Ok(entity)
    }

    pub async fn read(&self, id: &E::Key) -> Result<E, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found::<E>(id))
    }

    pub async fn read_all(&self) -> Result<Vec<E>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// Persists the caller's payload over the stored entity with the same id.
    pub async fn update(&self, entity: E) -> Result<E, ServiceError> {
        if !self.store.replace(&entity).await? {
            log::warn!("⚠️ Cannot update {} {}: not found", E::NAME, entity.id());
            return Err(ServiceError::not_found::<E>(entity.id()));
        }

        log::info!("🔧 Updated {} {}", E::NAME, entity.id());
        Ok(entity)
    }

    pub async fn delete(&self, id: &E::Key) -> Result<(), ServiceError> {
        if !self.store.delete_by_id(id).await? {
            log::warn!("⚠️ Cannot delete {} {}: not found", E::NAME, id);
            return Err(ServiceError::not_found::<E>(id));
        }

        log::info!("🗑️  Deleted {} {}", E::NAME, id);
        Ok(())
    }
}
