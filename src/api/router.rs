use std::path::Path;
use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;

use crate::api::handlers::{chats, health, messages};
use crate::api::middleware::{rate_limit_middleware, require_json, RateLimiters};
use crate::application::use_cases::{
    CreateChatUseCase, DeleteChatUseCase, GetChatUseCase, ListChatsUseCase, SendMessageUseCase,
};

/// Request bodies larger than this are rejected outright
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub create_chat: Arc<CreateChatUseCase>,
    pub get_chat: Arc<GetChatUseCase>,
    pub list_chats: Arc<ListChatsUseCase>,
    pub delete_chat: Arc<DeleteChatUseCase>,
    pub send_message: Arc<SendMessageUseCase>,
}

/// Create router with all routes and middleware.
///
/// Each endpoint class carries its own rate limiter, and body-bearing
/// routes additionally require a JSON content type. Route layers run
/// outermost-last, so the content type check precedes the rate limit
/// check, which precedes the handler.
pub fn create_router(state: AppState, limiters: RateLimiters, uploads_dir: &Path) -> Router {
    let create_chat_routes = Router::new()
        .route("/api/chat", post(chats::create_chat))
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&limiters.chat_create),
            rate_limit_middleware,
        ))
        .route_layer(axum_middleware::from_fn(require_json));

    let list_chat_routes = Router::new()
        .route("/api/chats", get(chats::list_chats))
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&limiters.chat_list),
            rate_limit_middleware,
        ));

    let read_chat_routes = Router::new()
        .route("/api/chat/{id}", get(chats::get_chat))
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&limiters.chat_read),
            rate_limit_middleware,
        ));

    let delete_chat_routes = Router::new()
        .route("/api/chat/{id}", delete(chats::delete_chat))
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&limiters.chat_delete),
            rate_limit_middleware,
        ));

    let message_routes = Router::new()
        .route("/api/chat/message", post(messages::send_message))
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&limiters.message_send),
            rate_limit_middleware,
        ))
        .route_layer(axum_middleware::from_fn(require_json));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_chat_routes)
        .merge(list_chat_routes)
        .merge(read_chat_routes)
        .merge(delete_chat_routes)
        .merge(message_routes)
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
