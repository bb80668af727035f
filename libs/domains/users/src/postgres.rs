use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, DbErr, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{CreateUser, UpdateUser, User, UserFilter},
    repository::UserRepository,
};

/// PostgreSQL-backed user store
///
/// Login and email uniqueness is enforced by the unique indexes created in
/// the `users` migration.
#[derive(Clone)]
pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn find_one(&self, condition: Condition) -> UserResult<Option<User>> {
        let model = self.base.find_one_by_condition(condition).await?;
        Ok(model.map(Into::into))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, input), fields(login = %input.login))]
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let (login, email) = (input.login.clone(), input.email.clone());
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| UserError::from_write(e, &login, &email))?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn get_by_login(&self, login: &str) -> UserResult<Option<User>> {
        self.find_one(Condition::all().add(entity::Column::Login.eq(login)))
            .await
    }

    #[instrument(skip(self))]
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.find_one(Condition::all().add(entity::Column::Email.eq(email)))
            .await
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        let mut query = self.base.select();

        if let Some(name) = filter.name {
            query = query.filter(entity::Column::Name.eq(name));
        }
        if let Some(age) = filter.age {
            query = query.filter(entity::Column::Age.eq(age));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        self.base
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let (login, email) = (input.login.clone(), input.email.clone());
        let model = self
            .base
            .update(entity::ActiveModel::for_update(id, input))
            .await
            .map_err(|e| match e {
                // Deleted between the lookup and the write
                DbErr::RecordNotUpdated => UserError::NotFound(id),
                other => UserError::from_write(other, &login, &email),
            })?;

        tracing::info!(user_id = %id, "Updated user");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> UserResult<u64> {
        let removed = self.base.delete_all().await?;

        tracing::info!(removed, "Deleted all users");
        Ok(removed)
    }
}
