//! Message database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Message, MessageType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub content: String,
    pub message_type: String,
    pub is_read: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Message {
    fn from(model: Model) -> Self {
        Message {
            id: model.id,
            name: model.name,
            email: model.email,
            content: model.content,
            message_type: MessageType::from(model.message_type.as_str()),
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
