use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserMessageData;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn get_user(
    State(state): State<AppState>,
    current_user: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<UserMessageData>, ApiError> {
    current_user.require_role(Role::Admin)?;
    let user_id = UserId::from_string(&user_id).map_err(UserError::from)?;

    state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(StatusCode::OK, UserMessageData::new("User retrieved", user))
        })
}
