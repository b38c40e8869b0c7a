use axum::http::StatusCode;

use super::ApiSuccess;
use super::MessageData;

/// Unauthenticated liveness endpoint.
pub async fn hello() -> ApiSuccess<MessageData> {
    ApiSuccess::new(StatusCode::OK, MessageData::new("Hello"))
}
