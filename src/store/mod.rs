//! Persistence stores keyed by entity identifier.
//!
//! Every mutating operation is conditional on the identifier's presence and
//! reports whether it took effect, so callers never check-then-write in two
//! separate steps.

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Entity;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("store backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    async fn find_by_id(&self, id: &E::Key) -> Result<Option<E>, StoreError>;

    async fn find_all(&self) -> Result<Vec<E>, StoreError>;

    /// Inserts `entity` unless its identifier is already present.
    /// Returns `false` (and leaves the store untouched) on a duplicate.
    async fn insert(&self, entity: &E) -> Result<bool, StoreError>;

    /// Overwrites the entity with the same identifier.
    /// Returns `false` when no such entity exists; nothing is written then.
    async fn replace(&self, entity: &E) -> Result<bool, StoreError>;

    /// Returns `false` when the identifier was absent.
    async fn delete_by_id(&self, id: &E::Key) -> Result<bool, StoreError>;
}
