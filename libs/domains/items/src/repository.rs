use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, UpdateItem};

/// Repository trait for Item persistence
///
/// Implemented by the Postgres store and by an in-memory store used in
/// development and tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Create a new item
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>>;

    /// List items matching `filter`, oldest first
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>>;

    /// Overwrite an existing item; `NotFound` when `id` is absent
    async fn update(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item>;

    /// Delete an item by ID, `false` when it did not exist
    async fn delete(&self, id: Uuid) -> ItemResult<bool>;

    /// Delete every item and return how many were removed
    async fn delete_all(&self) -> ItemResult<u64>;
}

/// In-memory implementation of ItemRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<Uuid, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let item = Item::new(input);
        self.items.write().await.insert(item.id, item.clone());

        tracing::info!(item_id = %item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;

        let mut result: Vec<Item> = items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();

        // v7 ids sort by creation time
        result.sort_by_key(|item| item.id);
        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item> {
        let mut items = self.items.write().await;
        let item = items.get_mut(&id).ok_or(ItemError::NotFound(id))?;

        item.apply_update(input);

        tracing::info!(item_id = %id, "Updated item");
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> ItemResult<bool> {
        let mut items = self.items.write().await;

        if items.remove(&id).is_some() {
            tracing::info!(item_id = %id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete_all(&self) -> ItemResult<u64> {
        let mut items = self.items.write().await;
        let removed = items.len() as u64;
        items.clear();

        tracing::info!(removed, "Deleted all items");
        Ok(removed)
    }
}
