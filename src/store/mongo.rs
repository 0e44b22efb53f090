use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::Document;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Collection;

use super::{Store, StoreError};
use crate::database::MongoDB;
use crate::models::Entity;

/// Server error code for a unique index violation
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB-backed store, one collection per entity.
///
/// Relies on the unique index created by [`MongoDB::ensure_indexes`] on the
/// identifier field: `insert_one` is the existence check for creates.
pub struct MongoStore<E: Entity> {
    collection: Collection<E>,
}

impl<E: Entity> MongoStore<E> {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            collection: db.collection::<E>(E::COLLECTION),
        }
    }
}

fn id_filter<E: Entity>(id: &E::Key) -> Document {
    let mut filter = Document::new();
    filter.insert(E::ID_FIELD, id.clone());
    filter
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl<E: Entity> Store<E> for MongoStore<E> {
    async fn find_by_id(&self, id: &E::Key) -> Result<Option<E>, StoreError> {
        Ok(self.collection.find_one(id_filter::<E>(id)).await?)
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        let cursor = self.collection.find(Document::new()).await?;
        Ok(cursor.try_collect::<Vec<E>>().await?)
    }

    async fn insert(&self, entity: &E) -> Result<bool, StoreError> {
        match self.collection.insert_one(entity).await {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn replace(&self, entity: &E) -> Result<bool, StoreError> {
        let result = self
            .collection
            .replace_one(id_filter::<E>(entity.id()), entity)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: &E::Key) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(id_filter::<E>(id)).await?;
        Ok(result.deleted_count > 0)
    }
}
