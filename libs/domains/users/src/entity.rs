use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use crate::models::{CreateUser, UpdateUser, User};

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub login: String,
    pub password: String,
    #[sea_orm(unique)]
    pub email: String,
    pub age: i32,
    pub registration_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            login: model.login,
            password: model.password,
            email: model.email,
            age: model.age,
            registration_date: model.registration_date,
        }
    }
}

impl From<CreateUser> for ActiveModel {
    fn from(input: CreateUser) -> Self {
        let user = User::new(input);

        ActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            login: Set(user.login),
            password: Set(user.password),
            email: Set(user.email),
            age: Set(user.age),
            registration_date: Set(user.registration_date),
        }
    }
}

impl ActiveModel {
    /// Overwrites every editable column of row `id`; the registration date
    /// is left untouched.
    pub fn for_update(id: Uuid, input: UpdateUser) -> Self {
        ActiveModel {
            id: Unchanged(id),
            name: Set(input.name),
            login: Set(input.login),
            password: Set(input.password),
            email: Set(input.email),
            age: Set(input.age),
            registration_date: NotSet,
        }
    }
}
