use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    current_user: AuthenticatedUser,
) -> Result<ApiSuccess<ListUsersResponseData>, ApiError> {
    current_user.require_role(Role::Admin)?;

    let users = state.user_service.list_users().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListUsersResponseData {
            message: "Users retrieved".to_string(),
            users: users.iter().map(UserSummary::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUsersResponseData {
    pub message: String,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub name: String,
    /// Path of the admin lookup endpoint for this account
    pub link: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            name: user.name.as_str().to_string(),
            link: format!("/user/get/{}", user.id),
        }
    }
}
