use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use rand::RngCore;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::application::ports::{ImageGenerationProvider, ProviderError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
struct InlineData {
    data: String,
}

/// HTTP client for a Gemini-style `generateContent` image endpoint.
///
/// The generated image arrives as inline base64; it is decoded and written
/// under the uploads directory, and the returned value is the URL path a
/// web client can render directly.
pub struct HttpImageGenerationProvider {
    client: reqwest::Client,
    api_key: String,
    url: String,
    uploads_dir: PathBuf,
}

impl HttpImageGenerationProvider {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        uploads_dir: PathBuf,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            base.trim_end_matches('/'),
            model.into()
        );
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
            uploads_dir,
        }
    }

    /// Random hex name so concurrent generations never collide.
    fn image_file_name() -> String {
        let mut bytes = [0u8; 8];
        rand::rng().fill_bytes(&mut bytes);
        format!("gen_{}.png", hex::encode(bytes))
    }

    async fn write_image(&self, bytes: Vec<u8>) -> Result<String, ProviderError> {
        tokio::fs::create_dir_all(&self.uploads_dir)
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("uploads dir: {}", e)))?;

        let file_name = Self::image_file_name();
        let path = self.uploads_dir.join(&file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("image write: {}", e)))?;

        Ok(format!("/uploads/{}", file_name))
    }
}

#[async_trait]
impl ImageGenerationProvider for HttpImageGenerationProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "image provider API key is not set".to_string(),
            ));
        }

        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] },
        });

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "Image provider returned an error");
            return Err(ProviderError::RequestFailed(format!(
                "upstream status {}",
                status
            )));
        }

        let parsed: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::BadResponse(e.to_string()))?;

        let inline = parsed
            .candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.parts)
            .find_map(|part| part.inline_data)
            .ok_or_else(|| {
                ProviderError::BadResponse("response contained no image data".to_string())
            })?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| ProviderError::BadResponse(format!("image payload: {}", e)))?;

        self.write_image(bytes).await
    }
}
