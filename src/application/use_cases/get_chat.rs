use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{ChatDto, ChatWithMessagesDto, MessageDto};
use crate::application::ports::{ChatStore, StoreError};
use crate::domain::value_objects::ChatId;

#[derive(Debug, Error)]
pub enum GetChatError {
    #[error("Chat not found: {0}")]
    NotFound(ChatId),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Use case: Fetch a chat together with its messages
pub struct GetChatUseCase {
    store: Arc<dyn ChatStore>,
}

impl GetChatUseCase {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    /// Messages come back in ascending creation order.
    pub async fn execute(&self, id: ChatId) -> Result<ChatWithMessagesDto, GetChatError> {
        let chat = self
            .store
            .get_chat(id)
            .await?
            .ok_or(GetChatError::NotFound(id))?;

        let messages = self.store.messages_by_chat(id).await?;

        Ok(ChatWithMessagesDto {
            chat: ChatDto::from(chat),
            messages: messages.into_iter().map(MessageDto::from).collect(),
        })
    }
}
