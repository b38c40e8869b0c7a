use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Exchange the presented token for a new one.
///
/// Only the token most recently stored for the account can be refreshed.
pub async fn refresh_token(
    State(state): State<AppState>,
    current_user: AuthenticatedUser,
) -> Result<ApiSuccess<RefreshTokenResponseData>, ApiError> {
    let token = state
        .user_service
        .refresh_token(&current_user.user_id, &current_user.token)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RefreshTokenResponseData {
            message: "Token refreshed".to_string(),
            token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshTokenResponseData {
    pub message: String,
    pub token: String,
}
