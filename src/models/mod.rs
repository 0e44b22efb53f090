pub mod news;
pub mod reminder;
pub mod user_profile;

pub use news::*;
pub use reminder::*;
pub use user_profile::*;

use mongodb::bson::Bson;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// A record uniquely keyed by its identifier.
///
/// Implemented once per collection; stores and services are generic over it,
/// so the three verticals share a single existence-gated CRUD path.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    type Key: Clone + Ord + fmt::Debug + fmt::Display + Into<Bson> + Send + Sync + 'static;

    /// Human readable name used in logs and errors
    const NAME: &'static str;

    /// MongoDB collection holding this entity
    const COLLECTION: &'static str;

    /// Name of the identifier attribute as stored (and serialized)
    const ID_FIELD: &'static str;

    fn id(&self) -> &Self::Key;
}
