use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserMessageData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::Password;
use crate::domain::user::models::Role;
use crate::domain::user::models::Username;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Admin-only account registration.
pub async fn register_user(
    State(state): State<AppState>,
    current_user: AuthenticatedUser,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserMessageData>, ApiError> {
    current_user.require_role(Role::Admin)?;
    let Json(body) = payload?;

    let user = state
        .user_service
        .create_user(body.try_into_command()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        UserMessageData::new("User registered", &user),
    ))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    username: String,
    password: String,
    name: String,
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, UserError> {
        Ok(CreateUserCommand::new(
            Username::new(self.username)?,
            Password::new(self.password)?,
            DisplayName::new(self.name)?,
        ))
    }
}
