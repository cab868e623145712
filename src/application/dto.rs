use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::application::sanitize::Sanitizer;
use crate::application::validation::{
    reject_sql_injection, reject_xss, FORBIDDEN_IMAGE_TERMS, SAFE_TITLE_PATTERN,
};
use crate::domain::entities::{Chat, Message};
use crate::domain::value_objects::{ProviderModel, ResponseType, Role};

/// Request body for POST /api/chat
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRequest {
    #[validate(
        length(min = 1, max = 100, message = "must be between 1 and 100 characters"),
        regex(
            path = *SAFE_TITLE_PATTERN,
            message = "may only contain alphanumerics and common punctuation"
        ),
        custom(function = reject_xss),
        custom(function = reject_sql_injection)
    )]
    pub title: String,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Request body for POST /api/chat/message
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = image_prompt_allowed))]
pub struct SendMessageRequest {
    #[validate(range(
        min = 1,
        max = 9007199254740990i64,
        message = "must be a positive integer"
    ))]
    pub chat_id: i64,
    #[validate(
        length(min = 1, max = 1000, message = "must be between 1 and 1000 characters"),
        custom(function = reject_xss)
    )]
    pub content: String,
    pub role: Role,
    pub response_type: ResponseType,
    /// Deprecated: the effective model is derived from `response_type`.
    /// Accepted for backwards compatibility with older clients.
    #[serde(default)]
    pub model: Option<ProviderModel>,
}

/// Image prompts must not contain explicit-content terms.
fn image_prompt_allowed(request: &SendMessageRequest) -> Result<(), ValidationError> {
    if request.response_type == ResponseType::Image
        && FORBIDDEN_IMAGE_TERMS.is_match(&request.content)
    {
        return Err(ValidationError::new("forbidden_terms")
            .with_message("contains content not allowed for image generation".into()));
    }
    Ok(())
}

/// DTO for chat responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatDto {
    pub id: i64,
    pub title: String,
    pub owner_id: Option<i64>,
    pub created_at: String,
}

impl From<Chat> for ChatDto {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id().value(),
            title: Sanitizer::sanitize_stored_text(chat.title()),
            owner_id: chat.owner_id(),
            created_at: chat.created_at().to_rfc3339(),
        }
    }
}

/// DTO for message responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: i64,
    pub chat_id: i64,
    pub content: String,
    pub role: Role,
    pub model: ProviderModel,
    pub response_type: ResponseType,
    pub created_at: String,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id().value(),
            chat_id: message.chat_id().value(),
            content: Sanitizer::sanitize_stored_text(message.content()),
            role: message.role(),
            model: message.model(),
            response_type: message.response_type(),
            created_at: message.created_at().to_rfc3339(),
        }
    }
}

/// Response for GET /api/chat/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatWithMessagesDto {
    pub chat: ChatDto,
    pub messages: Vec<MessageDto>,
}

/// Response for POST /api/chat/message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub user_message: MessageDto,
    pub assistant_message: MessageDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ChatId, MessageId};

    fn message_request(content: &str, response_type: ResponseType) -> SendMessageRequest {
        SendMessageRequest {
            chat_id: 1,
            content: content.to_string(),
            role: Role::User,
            response_type,
            model: None,
        }
    }

    #[test]
    fn test_create_chat_request_valid_title() {
        let request = CreateChatRequest {
            title: "Test".to_string(),
            owner_id: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_chat_request_title_too_long() {
        let request = CreateChatRequest {
            title: "x".repeat(101),
            owner_id: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_chat_request_rejects_empty_title() {
        let request = CreateChatRequest {
            title: String::new(),
            owner_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_chat_request_rejects_script_title() {
        let request = CreateChatRequest {
            title: "<script>alert(1)</script>".to_string(),
            owner_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_chat_request_rejects_sql_title() {
        let request = CreateChatRequest {
            title: "select title from chats; --".to_string(),
            owner_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_chat_request_rejects_non_positive_owner() {
        let request = CreateChatRequest {
            title: "ok".to_string(),
            owner_id: Some(0),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_send_message_request_valid() {
        assert!(message_request("Hi", ResponseType::Text).validate().is_ok());
    }

    #[test]
    fn test_send_message_request_bounds() {
        let mut request = message_request("Hi", ResponseType::Text);
        request.chat_id = 0;
        assert!(request.validate().is_err());

        let request = message_request(&"y".repeat(1001), ResponseType::Text);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_send_message_request_image_forbidden_terms() {
        let request = message_request("a nude figure", ResponseType::Image);
        assert!(request.validate().is_err());

        // Same content is acceptable for a text response.
        let request = message_request("a nude figure", ResponseType::Text);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_send_message_request_camel_case_wire_format() {
        let request: SendMessageRequest = serde_json::from_value(serde_json::json!({
            "chatId": 1,
            "content": "Hi",
            "role": "user",
            "model": "text-provider",
            "responseType": "text"
        }))
        .unwrap();

        assert_eq!(request.chat_id, 1);
        assert_eq!(request.model, Some(ProviderModel::TextProvider));
    }

    #[test]
    fn test_chat_dto_round_trips_sanitized_title() {
        let chat = Chat::new(ChatId::new(1).unwrap(), "Plans &amp; goals".to_string(), None);
        let dto = ChatDto::from(chat);
        assert_eq!(dto.title, "Plans &amp; goals");
    }

    #[test]
    fn test_message_dto_sanitizes_legacy_markup() {
        let message = Message::new(
            MessageId::from_sequence(1),
            ChatId::new(1).unwrap(),
            "<script>x</script>".to_string(),
            Role::Assistant,
            ResponseType::Text,
        );
        let dto = MessageDto::from(message);
        assert!(!dto.content.to_lowercase().contains("<script"));
    }
}
