use std::sync::Arc;
use thiserror::Error;

use crate::application::ports::{ChatStore, StoreError};
use crate::domain::value_objects::ChatId;

#[derive(Debug, Error)]
pub enum DeleteChatError {
    #[error("Chat not found: {0}")]
    NotFound(ChatId),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for DeleteChatError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ChatNotFound(id) => DeleteChatError::NotFound(id),
            other => DeleteChatError::Store(other),
        }
    }
}

/// Use case: Delete a chat and all of its messages
pub struct DeleteChatUseCase {
    store: Arc<dyn ChatStore>,
}

impl DeleteChatUseCase {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: ChatId) -> Result<(), DeleteChatError> {
        self.store.delete_chat(id).await?;

        tracing::info!(chat_id = id.value(), "Chat deleted");

        Ok(())
    }
}
