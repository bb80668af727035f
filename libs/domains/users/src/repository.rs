use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserFilter};

/// Repository trait for User persistence
///
/// Implementations enforce login and email uniqueness themselves and
/// report violations as `DuplicateLogin` / `DuplicateEmail`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by login
    async fn get_by_login(&self, login: &str) -> UserResult<Option<User>>;

    /// Get a user by email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// List users matching `filter`, oldest first
    async fn list(&self, filter: UserFilter) -> UserResult<Vec<User>>;

    /// Overwrite an existing user; `NotFound` when `id` is absent
    async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<User>;

    /// Delete a user by ID, `false` when it did not exist
    async fn delete(&self, id: Uuid) -> UserResult<bool>;

    /// Delete every user and return how many were removed
    async fn delete_all(&self) -> UserResult<u64>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mirrors the unique indexes on `users.login` and `users.email`.
fn check_unique(
    users: &HashMap<Uuid, User>,
    skip: Option<Uuid>,
    login: &str,
    email: &str,
) -> UserResult<()> {
    let others = users.values().filter(|u| Some(u.id) != skip);

    for user in others {
        if user.login == login {
            return Err(UserError::DuplicateLogin(login.to_string()));
        }
        if user.email == email {
            return Err(UserError::DuplicateEmail(email.to_string()));
        }
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut users = self.users.write().await;
        check_unique(&users, None, &input.login, &input.email)?;

        let user = User::new(input);
        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_login(&self, login: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.login == login).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users
            .values()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect();

        // v7 ids sort by creation time
        result.sort_by_key(|user| user.id);
        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&id) {
            return Err(UserError::NotFound(id));
        }
        check_unique(&users, Some(id), &input.login, &input.email)?;

        let user = users.get_mut(&id).ok_or(UserError::NotFound(id))?;
        user.apply_update(input);

        tracing::info!(user_id = %id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete_all(&self) -> UserResult<u64> {
        let mut users = self.users.write().await;
        let removed = users.len() as u64;
        users.clear();

        tracing::info!(removed, "Deleted all users");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(login: &str, email: &str) -> CreateUser {
        CreateUser {
            name: "Jane Doe".to_string(),
            login: login.to_string(),
            password: "secret".to_string(),
            email: email.to_string(),
            age: 30,
        }
    }

    fn update_input(login: &str, email: &str) -> UpdateUser {
        UpdateUser {
            name: "Jane Smith".to_string(),
            login: login.to_string(),
            password: "changed".to_string(),
            email: email.to_string(),
            age: 31,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let repo = InMemoryUserRepository::new();

        let user = repo
            .create(create_input("jdoe", "jane@example.com"))
            .await
            .unwrap();

        assert_eq!(repo.get_by_id(user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(repo.get_by_login("jdoe").await.unwrap(), Some(user.clone()));
        assert_eq!(
            repo.get_by_email("jane@example.com").await.unwrap(),
            Some(user)
        );
        assert_eq!(repo.get_by_login("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_login_and_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_input("jdoe", "jane@example.com"))
            .await
            .unwrap();

        let login_taken = repo.create(create_input("jdoe", "other@example.com")).await;
        assert!(matches!(login_taken, Err(UserError::DuplicateLogin(_))));

        let email_taken = repo.create(create_input("other", "jane@example.com")).await;
        assert!(matches!(email_taken, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_update_allows_own_login_but_not_anothers() {
        let repo = InMemoryUserRepository::new();
        let jane = repo
            .create(create_input("jdoe", "jane@example.com"))
            .await
            .unwrap();
        repo.create(create_input("bob", "bob@example.com"))
            .await
            .unwrap();

        let updated = repo
            .update(jane.id, update_input("jdoe", "jane@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Jane Smith");
        assert_eq!(updated.registration_date, jane.registration_date);

        let clash = repo
            .update(jane.id, update_input("bob", "jane@example.com"))
            .await;
        assert!(matches!(clash, Err(UserError::DuplicateLogin(_))));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        let id = Uuid::now_v7();

        let result = repo.update(id, update_input("jdoe", "j@example.com")).await;
        assert!(matches!(result, Err(UserError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_list_filters_by_name_and_age() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_input("a", "a@example.com")).await.unwrap();
        repo.create(CreateUser {
            name: "Bob".to_string(),
            age: 40,
            ..create_input("b", "b@example.com")
        })
        .await
        .unwrap();

        assert_eq!(repo.list(UserFilter::by_name("Jane Doe")).await.unwrap().len(), 1);
        assert_eq!(repo.list(UserFilter::by_age(40)).await.unwrap().len(), 1);
        assert_eq!(repo.list(UserFilter::default()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_and_delete_all() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(create_input("a", "a@example.com")).await.unwrap();
        repo.create(create_input("b", "b@example.com")).await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
        assert_eq!(repo.delete_all().await.unwrap(), 1);
        assert!(repo.list(UserFilter::default()).await.unwrap().is_empty());
    }
}
