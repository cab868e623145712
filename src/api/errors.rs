use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::application::use_cases::{
    CreateChatError, DeleteChatError, GetChatError, ListChatsError, SendMessageError,
};

/// Per-field validation failure detail
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// API error response
///
/// Client-facing messages never include upstream provider bodies, store
/// internals, or stack traces; those go to the logs only.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    field_errors: Option<Vec<FieldError>>,
    retry_after: Option<u64>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field_errors: None,
            retry_after: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn validation_failed(field_errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation failed".to_string(),
            field_errors: Some(field_errors),
            retry_after: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unsupported_media_type(expected: &str) -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Unsupported media type. Expected {}", expected),
        )
    }

    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "Too many requests, please try again later".to_string(),
            field_errors: None,
            retry_after: Some(retry_after_secs),
        }
    }

    pub fn upstream_failed() -> Self {
        Self::new(
            StatusCode::BAD_GATEWAY,
            "The AI assistant is unavailable right now, please try again later",
        )
    }

    pub fn internal_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({ "message": self.message });
        if let Some(errors) = &self.field_errors {
            body["errors"] = json!(errors);
        }
        if let Some(retry_after) = self.retry_after {
            body["retryAfter"] = json!(retry_after);
        }

        let mut response = (self.status, Json(body)).into_response();
        if let Some(retry_after) = self.retry_after {
            if let Ok(value) = retry_after.to_string().parse() {
                response.headers_mut().insert("Retry-After", value);
            }
        }
        response
    }
}

// Convert use case errors to API errors

impl From<CreateChatError> for ApiError {
    fn from(err: CreateChatError) -> Self {
        match err {
            CreateChatError::Store(e) => {
                tracing::error!(error = %e, "Chat creation failed");
                ApiError::internal_error()
            }
        }
    }
}

impl From<GetChatError> for ApiError {
    fn from(err: GetChatError) -> Self {
        match err {
            GetChatError::NotFound(_) => ApiError::not_found("Chat not found"),
            GetChatError::Store(e) => {
                tracing::error!(error = %e, "Chat lookup failed");
                ApiError::internal_error()
            }
        }
    }
}

impl From<ListChatsError> for ApiError {
    fn from(err: ListChatsError) -> Self {
        match err {
            ListChatsError::Store(e) => {
                tracing::error!(error = %e, "Chat listing failed");
                ApiError::internal_error()
            }
        }
    }
}

impl From<DeleteChatError> for ApiError {
    fn from(err: DeleteChatError) -> Self {
        match err {
            DeleteChatError::NotFound(_) => ApiError::not_found("Chat not found"),
            DeleteChatError::Store(e) => {
                tracing::error!(error = %e, "Chat deletion failed");
                ApiError::internal_error()
            }
        }
    }
}

impl From<SendMessageError> for ApiError {
    fn from(err: SendMessageError) -> Self {
        match err {
            SendMessageError::InvalidRequest(msg) => ApiError::bad_request(msg),
            SendMessageError::ChatNotFound(_) => ApiError::not_found("Chat not found"),
            SendMessageError::Provider(e) => {
                tracing::error!(error = %e, "Upstream provider call failed");
                ApiError::upstream_failed()
            }
            SendMessageError::Store(e) => {
                tracing::error!(error = %e, "Message persistence failed");
                ApiError::internal_error()
            }
        }
    }
}
