//! Message repository: persistence for the contact-message inbox.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use super::entities::message::{self, ActiveModel, Entity as MessageEntity};
use crate::domain::{Message, MessageType, UpdateMessage};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Message repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// One page of messages, optionally filtered by type, plus the total.
    async fn list_filtered(
        &self,
        message_type: Option<MessageType>,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Message>, u64)>;

    /// Overwrite the mutable fields. `None` when the id does not exist.
    async fn update_by_id(&self, id: i32, changes: UpdateMessage) -> AppResult<Option<Message>>;

    /// Flag the message as read. `None` when the id does not exist.
    async fn mark_read(&self, id: i32) -> AppResult<Option<Message>>;
}

/// Concrete implementation of MessageRepository over the messages table
pub struct MessageStore {
    db: DatabaseConnection,
}

impl MessageStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageStore {
    async fn list_filtered(
        &self,
        message_type: Option<MessageType>,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Message>, u64)> {
        let mut query = MessageEntity::find();
        if let Some(message_type) = message_type {
            query = query.filter(message::Column::MessageType.eq(message_type.to_string()));
        }

        let paginator = query.paginate(&self.db, page.limit());
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AppError::persistence("retrieving messages", e))?;
        let models = paginator
            .fetch_page(page.page.saturating_sub(1))
            .await
            .map_err(|e| AppError::persistence("retrieving messages", e))?;

        Ok((models.into_iter().map(Message::from).collect(), total))
    }

    async fn update_by_id(&self, id: i32, changes: UpdateMessage) -> AppResult<Option<Message>> {
        let Some(model) = MessageEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::persistence("updating message", e))?
        else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.content = Set(changes.content);
        active.message_type = Set(changes.message_type.to_string());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::persistence("updating message", e))?;

        Ok(Some(Message::from(model)))
    }

    async fn mark_read(&self, id: i32) -> AppResult<Option<Message>> {
        let Some(model) = MessageEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::persistence("marking message read", e))?
        else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.is_read = Set(true);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::persistence("marking message read", e))?;

        Ok(Some(Message::from(model)))
    }
}
