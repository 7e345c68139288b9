//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemDocument, ItemPayload};
use crate::repository::ItemRepository;

/// Default collection holding items
pub const DEFAULT_COLLECTION: &str = "items";

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Create a new MongoItemRepository over the `items` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoItemRepository::new(&client.database("items"));
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    /// Create a new MongoItemRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ItemDocument>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection
    pub fn collection(&self) -> &Collection<ItemDocument> {
        &self.collection
    }

    fn id_filter(id: ObjectId) -> Document {
        doc! { "_id": id }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ItemDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> ItemResult<Item> {
        self.collection
            .find_one(Self::id_filter(id))
            .await?
            .map(Item::from)
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    async fn insert(&self, input: ItemPayload) -> ItemResult<Item> {
        let document = ItemDocument::from(input);
        let result = self.collection.insert_one(&document).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ItemError::StorageUnavailable(format!(
                "store assigned a non-ObjectId _id: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(item_id = %id, "Item created successfully");
        Ok(Item::from(document.with_id(id)))
    }

    #[instrument(skip(self, input), fields(item_id = %id))]
    async fn replace(&self, id: ObjectId, input: ItemPayload) -> ItemResult<Item> {
        let document = ItemDocument::from(input);
        let result = self
            .collection
            .replace_one(Self::id_filter(id), &document)
            .await?;

        if result.matched_count == 0 {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = %id, "Item updated successfully");
        Ok(Item::from(document.with_id(id)))
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn delete_by_id(&self, id: ObjectId) -> ItemResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = %id, "Item deleted successfully");
        Ok(())
    }
}
