use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ChatId;

/// Chat aggregate root - a titled conversation container owning an ordered
/// sequence of messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    id: ChatId,
    title: String,
    owner_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl Chat {
    /// Create a new chat with a store-assigned identifier
    pub fn new(id: ChatId, title: String, owner_id: Option<i64>) -> Self {
        Self {
            id,
            title,
            owner_id,
            created_at: Utc::now(),
        }
    }

    /// Reconstruct from storage
    pub fn reconstruct(
        id: ChatId,
        title: String,
        owner_id: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            owner_id,
            created_at,
        }
    }

    /// Rename the chat. Title is the only mutable field.
    pub fn rename(&mut self, title: String) {
        self.title = title;
    }

    // Getters
    pub fn id(&self) -> ChatId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner_id(&self) -> Option<i64> {
        self.owner_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
