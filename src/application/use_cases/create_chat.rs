use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{ChatDto, CreateChatRequest};
use crate::application::ports::{ChatStore, StoreError};

#[derive(Debug, Error)]
pub enum CreateChatError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Use case: Create a new chat
pub struct CreateChatUseCase {
    store: Arc<dyn ChatStore>,
}

impl CreateChatUseCase {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    /// Persist a chat from an already sanitized and validated request.
    pub async fn execute(&self, request: CreateChatRequest) -> Result<ChatDto, CreateChatError> {
        let chat = self
            .store
            .create_chat(request.title, request.owner_id)
            .await?;

        tracing::info!(chat_id = chat.id().value(), "Chat created");

        Ok(ChatDto::from(chat))
    }
}
