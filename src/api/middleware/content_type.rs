use axum::{
    extract::Request,
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::errors::ApiError;

/// Reject body-carrying requests whose content type is not JSON.
///
/// Applied to POST routes only; bodyless methods carry no Content-Type.
pub async fn require_json(request: Request, next: Next) -> Response {
    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false);

    if !is_json {
        return ApiError::unsupported_media_type("application/json").into_response();
    }

    next.run(request).await
}
