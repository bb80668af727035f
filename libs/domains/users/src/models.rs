use axum_helpers::validation::not_blank;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Stored user, including the password. Never returned over HTTP.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique across all users
    pub login: String,
    /// Stored as provided
    pub password: String,
    /// Unique across all users
    pub email: String,
    pub age: i32,
    /// Set once at creation
    pub registration_date: NaiveDate,
}

impl User {
    pub fn new(input: CreateUser) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            login: input.login,
            password: input.password,
            email: input.email,
            age: input.age,
            registration_date: Utc::now().date_naive(),
        }
    }

    /// Overwrite everything but the id and registration date.
    pub fn apply_update(&mut self, update: UpdateUser) {
        self.name = update.name;
        self.login = update.login;
        self.password = update.password;
        self.email = update.email;
        self.age = update.age;
    }
}

/// User as returned by the API (password stripped)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub login: String,
    pub email: String,
    pub age: i32,
    pub registration_date: NaiveDate,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            login: user.login,
            email: user.email,
            age: user.age,
            registration_date: user.registration_date,
        }
    }
}

/// DTO for registering a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "Jane Doe",
    "login": "jdoe",
    "password": "secret",
    "email": "jane@example.com",
    "age": 30
}))]
pub struct CreateUser {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub login: String,
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
}

/// DTO for editing a user; every field is overwritten
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub login: String,
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
}

/// Exact-match criteria for listing users. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl UserFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_age(age: i32) -> Self {
        Self {
            age: Some(age),
            ..Default::default()
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.name.as_ref().is_none_or(|n| &user.name == n)
            && self.age.is_none_or(|a| user.age == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> CreateUser {
        CreateUser {
            name: "Jane Doe".to_string(),
            login: "jdoe".to_string(),
            password: "secret".to_string(),
            email: "jane@example.com".to_string(),
            age: 30,
        }
    }

    #[test]
    fn test_create_user_valid() {
        assert!(jane().validate().is_ok());
    }

    #[test]
    fn test_create_user_invalid_fields() {
        let input = CreateUser {
            login: " ".to_string(),
            email: "not-an-email".to_string(),
            age: 0,
            ..jane()
        };

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("login"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("age"));
    }

    #[test]
    fn test_blank_password_rejected() {
        let input = CreateUser {
            password: "   ".to_string(),
            ..jane()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let update = UpdateUser {
            name: "Jane Doe".to_string(),
            login: "jdoe".to_string(),
            password: String::new(),
            email: "jane@example.com".to_string(),
            age: 30,
        };
        let errors = update.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_age_upper_bound() {
        let input = CreateUser { age: 151, ..jane() };
        assert!(input.validate().is_err());

        let input = CreateUser { age: 150, ..jane() };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_new_user_sets_registration_date_today() {
        let user = User::new(jane());
        assert_eq!(user.registration_date, Utc::now().date_naive());
    }

    #[test]
    fn test_apply_update_keeps_id_and_registration_date() {
        let mut user = User::new(jane());
        let (id, registered) = (user.id, user.registration_date);

        user.apply_update(UpdateUser {
            name: "Jane Smith".to_string(),
            login: "jsmith".to_string(),
            password: "changed".to_string(),
            email: "jsmith@example.com".to_string(),
            age: 31,
        });

        assert_eq!(user.id, id);
        assert_eq!(user.registration_date, registered);
        assert_eq!(user.login, "jsmith");
    }

    #[test]
    fn test_response_omits_password() {
        let response: UserResponse = User::new(jane()).into();
        let body = serde_json::to_value(&response).unwrap();

        assert!(body.get("password").is_none());
        assert_eq!(body["login"], "jdoe");
    }
}
