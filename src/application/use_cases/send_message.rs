use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{MessageDto, SendMessageRequest, SendMessageResponse};
use crate::application::ports::{
    ChatStore, ImageGenerationProvider, ProviderError, StoreError, TextCompletionProvider,
};
use crate::domain::value_objects::{ChatId, ResponseType, Role};

#[derive(Debug, Error)]
pub enum SendMessageError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Chat not found: {0}")]
    ChatNotFound(ChatId),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for SendMessageError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ChatNotFound(id) => SendMessageError::ChatNotFound(id),
            other => SendMessageError::Store(other),
        }
    }
}

/// Use case: Persist a user turn, obtain the assistant's reply from the
/// matching upstream provider, and persist that too.
///
/// The two writes are not transactional; a failure between them leaves a
/// chat whose last message is the user's, which is a valid state. Provider
/// calls are abandoned if the caller goes away; nothing is cancelled
/// upstream.
pub struct SendMessageUseCase {
    store: Arc<dyn ChatStore>,
    text_provider: Arc<dyn TextCompletionProvider>,
    image_provider: Arc<dyn ImageGenerationProvider>,
}

impl SendMessageUseCase {
    pub fn new(
        store: Arc<dyn ChatStore>,
        text_provider: Arc<dyn TextCompletionProvider>,
        image_provider: Arc<dyn ImageGenerationProvider>,
    ) -> Self {
        Self {
            store,
            text_provider,
            image_provider,
        }
    }

    pub async fn execute(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageResponse, SendMessageError> {
        if request.role != Role::User {
            return Err(SendMessageError::InvalidRequest(
                "Only user messages can be sent".to_string(),
            ));
        }

        let chat_id = ChatId::new(request.chat_id)
            .map_err(|e| SendMessageError::InvalidRequest(e.to_string()))?;

        // The store re-checks chat liveness on insert; this early check
        // avoids a provider round-trip for a dead chat.
        if self.store.get_chat(chat_id).await?.is_none() {
            return Err(SendMessageError::ChatNotFound(chat_id));
        }

        let user_message = self
            .store
            .create_message(chat_id, request.content.clone(), Role::User, request.response_type)
            .await?;

        let reply = match request.response_type {
            ResponseType::Text => self.text_provider.complete(&request.content).await?,
            ResponseType::Image => self.image_provider.generate(&request.content).await?,
        };

        let assistant_message = self
            .store
            .create_message(chat_id, reply, Role::Assistant, request.response_type)
            .await?;

        tracing::info!(
            chat_id = chat_id.value(),
            response_type = %request.response_type,
            "Message turn completed"
        );

        Ok(SendMessageResponse {
            user_message: MessageDto::from(user_message),
            assistant_message: MessageDto::from(assistant_message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockChatStore, MockImageGenerationProvider, MockTextCompletionProvider,
    };
    use crate::domain::entities::{Chat, Message};
    use crate::domain::value_objects::{MessageId, ProviderModel};
    use std::sync::atomic::{AtomicI64, Ordering};

    fn request(content: &str, response_type: ResponseType) -> SendMessageRequest {
        SendMessageRequest {
            chat_id: 1,
            content: content.to_string(),
            role: Role::User,
            response_type,
            model: None,
        }
    }

    fn store_with_chat() -> MockChatStore {
        let mut mock_store = MockChatStore::new();
        mock_store
            .expect_get_chat()
            .returning(|id| Ok(Some(Chat::new(id, "Test".to_string(), None))));
        let seq = AtomicI64::new(0);
        mock_store
            .expect_create_message()
            .returning(move |chat_id, content, role, response_type| {
                let id = seq.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(Message::new(
                    MessageId::from_sequence(id),
                    chat_id,
                    content,
                    role,
                    response_type,
                ))
            });
        mock_store
    }

    #[tokio::test]
    async fn test_text_turn_uses_text_provider() {
        let mut text = MockTextCompletionProvider::new();
        text.expect_complete()
            .times(1)
            .returning(|_| Ok("Hello!".to_string()));
        let image = MockImageGenerationProvider::new();

        let use_case =
            SendMessageUseCase::new(Arc::new(store_with_chat()), Arc::new(text), Arc::new(image));
        let response = use_case
            .execute(request("Hi", ResponseType::Text))
            .await
            .unwrap();

        assert_eq!(response.user_message.content, "Hi");
        assert_eq!(response.user_message.role, Role::User);
        assert_eq!(response.assistant_message.content, "Hello!");
        assert_eq!(response.assistant_message.role, Role::Assistant);
        assert_eq!(
            response.assistant_message.model,
            ProviderModel::TextProvider
        );
    }

    #[tokio::test]
    async fn test_image_turn_uses_image_provider() {
        let text = MockTextCompletionProvider::new();
        let mut image = MockImageGenerationProvider::new();
        image
            .expect_generate()
            .times(1)
            .returning(|_| Ok("/uploads/gen_ab12.png".to_string()));

        let use_case =
            SendMessageUseCase::new(Arc::new(store_with_chat()), Arc::new(text), Arc::new(image));
        let response = use_case
            .execute(request("A sunset over hills", ResponseType::Image))
            .await
            .unwrap();

        assert_eq!(response.assistant_message.content, "/uploads/gen_ab12.png");
        assert_eq!(
            response.assistant_message.model,
            ProviderModel::ImageProvider
        );
    }

    #[tokio::test]
    async fn test_assistant_role_is_rejected() {
        let use_case = SendMessageUseCase::new(
            Arc::new(MockChatStore::new()),
            Arc::new(MockTextCompletionProvider::new()),
            Arc::new(MockImageGenerationProvider::new()),
        );

        let mut req = request("Hi", ResponseType::Text);
        req.role = Role::Assistant;
        let result = use_case.execute(req).await;

        assert!(matches!(result, Err(SendMessageError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_unknown_chat_is_not_found_before_provider_call() {
        let mut mock_store = MockChatStore::new();
        mock_store.expect_get_chat().returning(|_| Ok(None));

        let use_case = SendMessageUseCase::new(
            Arc::new(mock_store),
            Arc::new(MockTextCompletionProvider::new()),
            Arc::new(MockImageGenerationProvider::new()),
        );
        let result = use_case.execute(request("Hi", ResponseType::Text)).await;

        assert!(matches!(result, Err(SendMessageError::ChatNotFound(_))));
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_after_user_message_saved() {
        let mut text = MockTextCompletionProvider::new();
        text.expect_complete()
            .returning(|_| Err(ProviderError::RequestFailed("upstream 500".to_string())));

        let use_case = SendMessageUseCase::new(
            Arc::new(store_with_chat()),
            Arc::new(text),
            Arc::new(MockImageGenerationProvider::new()),
        );
        let result = use_case.execute(request("Hi", ResponseType::Text)).await;

        assert!(matches!(result, Err(SendMessageError::Provider(_))));
    }
}
