use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::request::Parts;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity attached to a request by the `authenticate` middleware.
///
/// Extracting it in a handler fails with 401 when the request never went
/// through the middleware.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
    /// Bearer token exactly as presented
    pub token: String,
}

impl AuthenticatedUser {
    /// Handler-level role check.
    pub fn require_role(&self, role: Role) -> Result<(), ApiError> {
        if self.role == role {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %self.user_id,
                role = %self.role,
                required = %role,
                "Role check failed"
            );
            Err(ApiError::forbidden_action())
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Missing authenticated identity".to_string()))
    }
}

/// Middleware that validates bearer tokens and adds the identity to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?.to_string();

    let claims = state.authenticator.validate_token(&token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!("Failed to parse user ID from token: {}", e);
        ApiError::Unauthorized("Invalid token format".to_string())
    })?;

    let role = claims.role.parse::<Role>().map_err(|e| {
        tracing::error!("Failed to parse role from token: {}", e);
        ApiError::Unauthorized("Invalid token format".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        role,
        token,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    // Auth scheme names are case-insensitive
    auth_str
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::Unauthorized(
                "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with(header: &str) -> Request {
        http::Request::builder()
            .header(http::header::AUTHORIZATION, header)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_extracts_bearer_token() {
        let req = request_with("Bearer abc.def.ghi");
        assert_eq!(extract_token_from_header(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        for header in ["bearer abc", "BEARER abc", "BeArEr abc"] {
            let req = request_with(header);
            assert_eq!(extract_token_from_header(&req).unwrap(), "abc");
        }
    }

    #[test]
    fn test_rejects_other_schemes_and_empty_tokens() {
        for header in ["Basic abc", "Bearer", "Bearer   ", "abc"] {
            let req = request_with(header);
            assert!(matches!(
                extract_token_from_header(&req),
                Err(ApiError::Unauthorized(_))
            ));
        }
    }

    #[test]
    fn test_missing_header() {
        let req = http::Request::builder().body(Body::empty()).unwrap();
        assert!(matches!(
            extract_token_from_header(&req),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_role_check() {
        let user = AuthenticatedUser {
            user_id: UserId(2),
            role: Role::User,
            token: "t".to_string(),
        };

        assert!(user.require_role(Role::User).is_ok());
        assert_eq!(
            user.require_role(Role::Admin),
            Err(ApiError::forbidden_action())
        );
    }
}
