//! Item Service - executes one repository operation per request

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemPayload};
use crate::repository::ItemRepository;

/// Item service wrapping an injected repository
///
/// Holds no mutable state; concurrent requests only meet in the store.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every item
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list_all().await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ObjectId) -> ItemResult<Item> {
        self.repository.find_by_id(id).await
    }

    /// Create a new item with a store-assigned ID
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: ItemPayload) -> ItemResult<Item> {
        self.repository.insert(input).await
    }

    /// Replace an item's fields; the ID always comes from the caller's path
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: ObjectId, input: ItemPayload) -> ItemResult<Item> {
        self.repository.replace(id, input).await
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ObjectId) -> ItemResult<()> {
        self.repository.delete_by_id(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemError;
    use crate::repository::MockItemRepository;
    use mockall::predicate::eq;

    fn widget(id: ObjectId) -> Item {
        Item {
            id: Some(id.to_hex()),
            name: Some("Widget".to_string()),
            price: Some(10),
        }
    }

    #[tokio::test]
    async fn test_list_items_empty_collection() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_list_all().returning(|| Ok(vec![]));

        let service = ItemService::new(mock_repo);
        let items = service.list_items().await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_get_item_passes_not_found_through() {
        let mut mock_repo = MockItemRepository::new();
        let id = ObjectId::new();

        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(|id| Err(ItemError::NotFound(id)));

        let service = ItemService::new(mock_repo);
        let result = service.get_item(id).await;

        assert!(matches!(result, Err(ItemError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_create_item_returns_assigned_id() {
        let mut mock_repo = MockItemRepository::new();
        let id = ObjectId::new();

        mock_repo
            .expect_insert()
            .withf(|input| input.name.as_deref() == Some("Widget") && input.price == Some(10))
            .times(1)
            .returning(move |_| Ok(widget(id)));

        let service = ItemService::new(mock_repo);
        let created = service
            .create_item(ItemPayload {
                name: Some("Widget".to_string()),
                price: Some(10),
            })
            .await
            .unwrap();

        assert_eq!(created.id, Some(id.to_hex()));
    }

    #[tokio::test]
    async fn test_update_item_uses_path_id() {
        let mut mock_repo = MockItemRepository::new();
        let id = ObjectId::new();

        mock_repo
            .expect_replace()
            .with(eq(id), mockall::predicate::always())
            .times(1)
            .returning(|id, input| {
                Ok(Item {
                    id: Some(id.to_hex()),
                    name: input.name,
                    price: input.price,
                })
            });

        let service = ItemService::new(mock_repo);
        let updated = service
            .update_item(
                id,
                ItemPayload {
                    name: Some("Widget2".to_string()),
                    price: Some(20),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id.to_hex()));
        assert_eq!(updated.name.as_deref(), Some("Widget2"));
        assert_eq!(updated.price, Some(20));
    }

    #[tokio::test]
    async fn test_delete_item_storage_failure_is_returned() {
        let mut mock_repo = MockItemRepository::new();

        mock_repo
            .expect_delete_by_id()
            .returning(|_| Err(ItemError::StorageUnavailable("server selection timeout".into())));

        let service = ItemService::new(mock_repo);
        let result = service.delete_item(ObjectId::new()).await;

        assert!(matches!(result, Err(ItemError::StorageUnavailable(_))));
    }
}
