use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{CreateItem, Item, UpdateItem};

/// Sea-ORM Entity for the items table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Double")]
    pub weight: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            price: model.price,
            weight: model.weight,
        }
    }
}

impl From<CreateItem> for ActiveModel {
    fn from(input: CreateItem) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(input.title),
            description: Set(input.description),
            price: Set(input.price),
            weight: Set(input.weight),
        }
    }
}

impl ActiveModel {
    /// Active model that overwrites every column of row `id`.
    pub fn for_update(id: Uuid, input: UpdateItem) -> Self {
        ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(id),
            title: Set(input.title),
            description: Set(input.description),
            price: Set(input.price),
            weight: Set(input.weight),
        }
    }
}
