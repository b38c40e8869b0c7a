use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserMessageData;
use crate::domain::user::models::Role;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Account of the token's subject. Reserved for the `user` role.
pub async fn get_current_user(
    State(state): State<AppState>,
    current_user: AuthenticatedUser,
) -> Result<ApiSuccess<UserMessageData>, ApiError> {
    current_user.require_role(Role::User)?;

    let user = state.user_service.get_user(&current_user.user_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        UserMessageData::new("User retrieved", &user),
    ))
}
