use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ItemResult;
use crate::models::{Item, ItemPayload};

/// Repository trait for Item persistence
///
/// Identifiers and payloads are already validated by the time they reach an
/// implementation. Backend failures surface as `ItemError::StorageUnavailable`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every item in the collection, in store order
    async fn list_all(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by ID, `NotFound` if absent
    async fn find_by_id(&self, id: ObjectId) -> ItemResult<Item>;

    /// Insert a new item; the store assigns its ID
    async fn insert(&self, input: ItemPayload) -> ItemResult<Item>;

    /// Overwrite every field of an existing item, keeping its ID
    async fn replace(&self, id: ObjectId, input: ItemPayload) -> ItemResult<Item>;

    /// Delete an item by ID, `NotFound` if nothing was removed
    async fn delete_by_id(&self, id: ObjectId) -> ItemResult<()>;
}
