use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{CreateItem, Item, ItemFilter, UpdateItem},
    repository::ItemRepository,
};

/// PostgreSQL-backed item store
#[derive(Clone)]
pub struct PgItemRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(item_id = %model.id, "Created item");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let mut query = self.base.select();

        if let Some(title) = filter.title {
            query = query.filter(entity::Column::Title.eq(title));
        }
        if let Some(price) = filter.price {
            query = query.filter(entity::Column::Price.eq(price));
        }
        if let Some(weight) = filter.weight {
            query = query.filter(entity::Column::Weight.eq(weight));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item> {
        self.base
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        let model = self
            .base
            .update(entity::ActiveModel::for_update(id, input))
            .await
            .map_err(|e| match e {
                // Deleted between the lookup and the write
                DbErr::RecordNotUpdated => ItemError::NotFound(id),
                other => other.into(),
            })?;

        tracing::info!(item_id = %id, "Updated item");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ItemResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(item_id = %id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> ItemResult<u64> {
        let removed = self.base.delete_all().await?;

        tracing::info!(removed, "Deleted all items");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn lamp(id: Uuid) -> entity::Model {
        entity::Model {
            id,
            title: "Lamp".to_string(),
            description: Some("LED".to_string()),
            price: 25.5,
            weight: 2.0,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_converts_model() {
        let id = Uuid::now_v7();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![lamp(id)]])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let item = repo.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(item.id, id);
        assert_eq!(item.title, "Lamp");
        assert_eq!(item.description.as_deref(), Some("LED"));
        assert_eq!(item.price, 25.5);
    }

    #[tokio::test]
    async fn test_list_returns_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![lamp(Uuid::now_v7()), lamp(Uuid::now_v7())]])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let items = repo.list(ItemFilter::by_title("Lamp")).await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let id = Uuid::now_v7();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let update = UpdateItem {
            title: "Lamp".to_string(),
            description: None,
            price: 1.0,
            weight: 1.0,
        };

        let result = repo.update(id, update).await;
        assert!(matches!(result, Err(ItemError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_update_row_removed_before_write_is_not_found() {
        let id = Uuid::now_v7();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![lamp(id)], Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let update = UpdateItem {
            title: "Desk lamp".to_string(),
            description: None,
            price: 30.0,
            weight: 2.0,
        };

        let result = repo.update(id, update).await;
        assert!(matches!(result, Err(ItemError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_query_failure_maps_to_database_error() {
        // No results queued, so the mock connection errors
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PgItemRepository::new(db);

        let result = repo.get_by_id(Uuid::now_v7()).await;
        assert!(matches!(result, Err(ItemError::Database(_))));
    }
}
