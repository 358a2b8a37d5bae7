use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the todo_items table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::TodoItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            is_completed: model.is_completed,
        }
    }
}

impl From<crate::models::TodoItem> for ActiveModel {
    fn from(item: crate::models::TodoItem) -> Self {
        ActiveModel {
            id: Set(item.id),
            description: Set(item.description),
            is_completed: Set(item.is_completed),
        }
    }
}
