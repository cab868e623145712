use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::ChatDto;
use crate::application::ports::{ChatStore, StoreError};

#[derive(Debug, Error)]
pub enum ListChatsError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Use case: List all chats, newest first
pub struct ListChatsUseCase {
    store: Arc<dyn ChatStore>,
}

impl ListChatsUseCase {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<ChatDto>, ListChatsError> {
        let chats = self.store.list_chats().await?;
        Ok(chats.into_iter().map(ChatDto::from).collect())
    }
}
