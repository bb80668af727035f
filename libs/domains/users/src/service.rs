use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserFilter, UserResponse};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Every method returns [`UserResponse`], so the stored password never
/// leaves this layer.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list(UserFilter::default()).await?;
        Ok(into_responses(users))
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into())
    }

    /// Validate, then reject a taken login or email before inserting.
    ///
    /// The store's unique indexes still catch a concurrent registration
    /// that slips between the lookup and the insert.
    #[instrument(skip(self, input), fields(login = %input.login))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        input.validate()?;

        if self.repository.get_by_login(&input.login).await?.is_some() {
            return Err(UserError::DuplicateLogin(input.login));
        }
        if self.repository.get_by_email(&input.email).await?.is_some() {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let user = self.repository.create(input).await?;
        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_login(&self, login: String) -> UserResult<UserResponse> {
        let user = self.repository.get_by_login(&login).await?.ok_or(
            UserError::NotFoundBy {
                field: "login",
                value: login,
            },
        )?;

        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: String) -> UserResult<UserResponse> {
        let user = self.repository.get_by_email(&email).await?.ok_or(
            UserError::NotFoundBy {
                field: "email",
                value: email,
            },
        )?;

        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn get_users_by_name(&self, name: String) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list(UserFilter::by_name(&name)).await?;
        non_empty(users, "name", name)
    }

    #[instrument(skip(self))]
    pub async fn get_users_by_age(&self, age: i32) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list(UserFilter::by_age(age)).await?;
        non_empty(users, "age", age.to_string())
    }

    /// Overwrite name, login, password, email and age.
    ///
    /// Uniqueness is not pre-checked here; a clash with another user is
    /// reported by the store.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<UserResponse> {
        input.validate()?;
        let user = self.repository.update(id, input).await?;
        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(UserError::NotFound(id))
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_all_users(&self) -> UserResult<u64> {
        self.repository.delete_all().await
    }
}

fn into_responses(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(Into::into).collect()
}

fn non_empty(
    users: Vec<User>,
    field: &'static str,
    value: String,
) -> UserResult<Vec<UserResponse>> {
    if users.is_empty() {
        Err(UserError::NoMatch { field, value })
    } else {
        Ok(into_responses(users))
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
