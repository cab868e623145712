use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::middleware::sanitize_and_validate;
use crate::api::router::AppState;
use crate::application::dto::CreateChatRequest;
use crate::domain::value_objects::ChatId;

/// POST /api/chat
pub async fn create_chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let request: CreateChatRequest = sanitize_and_validate(body)?;
    let chat = state.create_chat.execute(request).await?;
    Ok((StatusCode::CREATED, Json(chat)))
}

/// GET /api/chats
pub async fn list_chats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let chats = state.list_chats.execute().await?;
    Ok(Json(chats))
}

/// GET /api/chat/{id}
pub async fn get_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let chat_id = parse_chat_id(&id)?;
    let chat = state.get_chat.execute(chat_id).await?;
    Ok(Json(chat))
}

/// DELETE /api/chat/{id}
pub async fn delete_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let chat_id = parse_chat_id(&id)?;
    state.delete_chat.execute(chat_id).await?;
    Ok(Json(json!({ "message": "Chat deleted successfully" })))
}

/// Malformed or out-of-range path ids are a client error, never a 404.
fn parse_chat_id(raw: &str) -> Result<ChatId, ApiError> {
    raw.parse::<ChatId>()
        .map_err(|err| ApiError::bad_request(format!("Invalid chat id: {err}")))
}
