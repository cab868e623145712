use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Chat, Message};
use crate::domain::value_objects::{ChatId, ResponseType, Role};
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Chat not found: {0}")]
    ChatNotFound(ChatId),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for chat and message persistence.
///
/// Identifiers are assigned by the store from monotonic sequences and are
/// never reused after deletion within a process lifetime.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Create a chat and assign it the next identifier
    async fn create_chat(&self, title: String, owner_id: Option<i64>)
        -> Result<Chat, StoreError>;

    /// Find a chat by ID
    async fn get_chat(&self, id: ChatId) -> Result<Option<Chat>, StoreError>;

    /// List all chats, newest first
    async fn list_chats(&self) -> Result<Vec<Chat>, StoreError>;

    /// Delete a chat and every message it owns.
    /// Fails with [`StoreError::ChatNotFound`] when the ID is unknown.
    async fn delete_chat(&self, id: ChatId) -> Result<(), StoreError>;

    /// Append a message to an existing chat.
    /// Fails with [`StoreError::ChatNotFound`] when the chat is gone.
    async fn create_message(
        &self,
        chat_id: ChatId,
        content: String,
        role: Role,
        response_type: ResponseType,
    ) -> Result<Message, StoreError>;

    /// Messages of a chat in ascending creation order
    async fn messages_by_chat(&self, chat_id: ChatId) -> Result<Vec<Message>, StoreError>;
}
