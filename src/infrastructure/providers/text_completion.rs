use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::error;

use crate::application::ports::{ProviderError, TextCompletionProvider};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1024;
/// Upstream calls are bounded so a hung provider cannot hang a handler.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint
/// (Mistral's hosted API by default).
///
/// Implements [`TextCompletionProvider`] so the send-message use case stays
/// decoupled from transport and serialization details. Upstream error
/// bodies are logged but never forwarded to clients.
pub struct HttpTextCompletionProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl HttpTextCompletionProvider {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }
}

#[async_trait]
impl TextCompletionProvider for HttpTextCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "text provider API key is not set".to_string(),
            ));
        }

        let request = ApiRequest {
            model: &self.model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "Text provider returned an error");
            return Err(ProviderError::RequestFailed(format!(
                "upstream status {}",
                status
            )));
        }

        let parsed: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::BadResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::BadResponse("response contained no choices".to_string()))
    }
}
