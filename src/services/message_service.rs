//! Message service - contact-inbox use cases over the repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Message, MessageType, UpdateMessage};
use crate::errors::AppResult;
use crate::infra::MessageRepository;
use crate::types::{Paginated, PaginationParams};

/// Message service trait for dependency injection.
#[async_trait]
pub trait MessageService: Send + Sync {
    /// List one page of messages, optionally filtered by type
    async fn list_messages(
        &self,
        message_type: Option<MessageType>,
        page: PaginationParams,
    ) -> AppResult<Paginated<Message>>;

    /// Overwrite a message's mutable fields (`None` when absent)
    async fn update_message(&self, id: i32, changes: UpdateMessage)
        -> AppResult<Option<Message>>;

    /// Flag a message as read (`None` when absent)
    async fn mark_read(&self, id: i32) -> AppResult<Option<Message>>;
}

/// Concrete implementation of MessageService
pub struct MessageManager {
    repo: Arc<dyn MessageRepository>,
}

impl MessageManager {
    /// Create new message service instance
    pub fn new(repo: Arc<dyn MessageRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl MessageService for MessageManager {
    async fn list_messages(
        &self,
        message_type: Option<MessageType>,
        page: PaginationParams,
    ) -> AppResult<Paginated<Message>> {
        let (data, total) = self.repo.list_filtered(message_type, &page).await?;
        Ok(Paginated::new(data, total))
    }

    async fn update_message(
        &self,
        id: i32,
        changes: UpdateMessage,
    ) -> AppResult<Option<Message>> {
        self.repo.update_by_id(id, changes).await
    }

    async fn mark_read(&self, id: i32) -> AppResult<Option<Message>> {
        self.repo.mark_read(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockMessageRepository;
    use chrono::Utc;

    fn message(id: i32, is_read: bool) -> Message {
        Message {
            id,
            name: "John Rider".to_string(),
            email: "john@example.com".to_string(),
            content: "Lost my jacket in a ride".to_string(),
            message_type: MessageType::Inquiry,
            is_read,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_list_messages_wraps_page() {
        let mut repo = MockMessageRepository::new();
        repo.expect_list_filtered()
            .returning(|_, _| Ok((vec![message(1, false), message(2, true)], 9)));

        let service = MessageManager::new(Arc::new(repo));
        let page = service
            .list_messages(Some(MessageType::Inquiry), PaginationParams::default())
            .await
            .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 9);
    }

    #[tokio::test]
    async fn test_mark_read_sets_flag() {
        let mut repo = MockMessageRepository::new();
        repo.expect_mark_read()
            .returning(|id| Ok(Some(message(id, true))));

        let service = MessageManager::new(Arc::new(repo));
        let updated = service.mark_read(5).await.unwrap().unwrap();

        assert!(updated.is_read);
    }
}
