//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Inputs are validated here as well as in the HTTP extractor so the rules
/// hold for every caller.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list(ItemFilter::default()).await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_items_by_title(&self, title: String) -> ItemResult<Vec<Item>> {
        let items = self.repository.list(ItemFilter::by_title(&title)).await?;
        non_empty(items, "title", title)
    }

    #[instrument(skip(self))]
    pub async fn get_items_by_price(&self, price: f64) -> ItemResult<Vec<Item>> {
        let items = self.repository.list(ItemFilter::by_price(price)).await?;
        non_empty(items, "price", price.to_string())
    }

    #[instrument(skip(self))]
    pub async fn get_items_by_weight(&self, weight: f64) -> ItemResult<Vec<Item>> {
        let items = self.repository.list(ItemFilter::by_weight(weight)).await?;
        non_empty(items, "weight", weight.to_string())
    }

    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> ItemResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }

    /// Always succeeds on a reachable store; returns the number removed.
    #[instrument(skip(self))]
    pub async fn delete_all_items(&self) -> ItemResult<u64> {
        self.repository.delete_all().await
    }
}

fn non_empty(items: Vec<Item>, field: &'static str, value: String) -> ItemResult<Vec<Item>> {
    if items.is_empty() {
        Err(ItemError::NoMatch { field, value })
    } else {
        Ok(items)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
