use axum::{extract::State, response::IntoResponse, Json};
use serde_json::Value;

use crate::api::errors::ApiError;
use crate::api::middleware::sanitize_and_validate;
use crate::api::router::AppState;
use crate::application::dto::SendMessageRequest;

/// POST /api/chat/message
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let request: SendMessageRequest = sanitize_and_validate(body)?;
    let response = state.send_message.execute(request).await?;
    Ok(Json(response))
}
