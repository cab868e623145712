use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ChatId, MessageId, ProviderModel, ResponseType, Role};

/// One turn in a chat, authored by the user or the assistant.
///
/// Messages are immutable after creation and are removed when the owning
/// chat is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    chat_id: ChatId,
    content: String,
    role: Role,
    model: ProviderModel,
    response_type: ResponseType,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a store-assigned identifier
    pub fn new(
        id: MessageId,
        chat_id: ChatId,
        content: String,
        role: Role,
        response_type: ResponseType,
    ) -> Self {
        Self {
            id,
            chat_id,
            content,
            role,
            model: ProviderModel::for_response_type(response_type),
            response_type,
            created_at: Utc::now(),
        }
    }

    /// Reconstruct from storage
    pub fn reconstruct(
        id: MessageId,
        chat_id: ChatId,
        content: String,
        role: Role,
        model: ProviderModel,
        response_type: ResponseType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            chat_id,
            content,
            role,
            model,
            response_type,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn model(&self) -> ProviderModel {
        self.model
    }

    pub fn response_type(&self) -> ResponseType {
        self.response_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
