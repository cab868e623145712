use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::application::ports::{ChatStore, StoreError};
use crate::domain::entities::{Chat, Message};
use crate::domain::value_objects::{ChatId, MessageId, ResponseType, Role};

/// In-memory [`ChatStore`] adapter.
///
/// Identifiers come from atomic sequences that only move forward, so an ID
/// freed by deletion is never handed out again within the process lifetime.
/// State does not survive a restart; the deployment is single-instance by
/// design.
pub struct InMemoryChatStore {
    chats: RwLock<HashMap<ChatId, Chat>>,
    messages: RwLock<HashMap<MessageId, Message>>,
    chat_seq: AtomicI64,
    message_seq: AtomicI64,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self {
            chats: RwLock::new(HashMap::new()),
            messages: RwLock::new(HashMap::new()),
            chat_seq: AtomicI64::new(0),
            message_seq: AtomicI64::new(0),
        }
    }
}

impl Default for InMemoryChatStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatStore for InMemoryChatStore {
    async fn create_chat(
        &self,
        title: String,
        owner_id: Option<i64>,
    ) -> Result<Chat, StoreError> {
        let id = ChatId::from_sequence(self.chat_seq.fetch_add(1, Ordering::SeqCst) + 1);
        let chat = Chat::new(id, title, owner_id);
        self.chats.write().insert(id, chat.clone());

        debug!(chat_id = id.value(), "Chat stored");
        Ok(chat)
    }

    async fn get_chat(&self, id: ChatId) -> Result<Option<Chat>, StoreError> {
        Ok(self.chats.read().get(&id).cloned())
    }

    async fn list_chats(&self) -> Result<Vec<Chat>, StoreError> {
        let mut chats: Vec<Chat> = self.chats.read().values().cloned().collect();
        chats.sort_by(|a, b| b.created_at().cmp(&a.created_at()).then(b.id().cmp(&a.id())));
        Ok(chats)
    }

    async fn delete_chat(&self, id: ChatId) -> Result<(), StoreError> {
        if self.chats.write().remove(&id).is_none() {
            return Err(StoreError::ChatNotFound(id));
        }

        // Cascade to the chat's messages.
        let mut messages = self.messages.write();
        messages.retain(|_, message| message.chat_id() != id);

        debug!(chat_id = id.value(), "Chat and messages deleted");
        Ok(())
    }

    async fn create_message(
        &self,
        chat_id: ChatId,
        content: String,
        role: Role,
        response_type: ResponseType,
    ) -> Result<Message, StoreError> {
        if !self.chats.read().contains_key(&chat_id) {
            return Err(StoreError::ChatNotFound(chat_id));
        }

        let id = MessageId::from_sequence(self.message_seq.fetch_add(1, Ordering::SeqCst) + 1);
        let message = Message::new(id, chat_id, content, role, response_type);
        self.messages.write().insert(id, message.clone());

        Ok(message)
    }

    async fn messages_by_chat(&self, chat_id: ChatId) -> Result<Vec<Message>, StoreError> {
        let mut messages: Vec<Message> = self
            .messages
            .read()
            .values()
            .filter(|message| message.chat_id() == chat_id)
            .cloned()
            .collect();
        // Timestamps can collide at millisecond resolution; the sequence ID
        // is the creation-order tiebreaker.
        messages.sort_by(|a, b| a.created_at().cmp(&b.created_at()).then(a.id().cmp(&b.id())));
        Ok(messages)
    }
}
