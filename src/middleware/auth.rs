use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::database::models::{Role, User};
use crate::database::queries::users;
use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the raw token (no Bearer scheme)
pub const AUTH_HEADER: &str = "auth-token";

/// Authenticated caller, injected into request extensions
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Who may call a route once the token checks out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Any valid token
    Any,
    /// Users with the admin flag, whatever their role
    Admin,
    /// Users with the given role
    HasRole(Role),
}

impl AccessPolicy {
    pub const TEACHER: AccessPolicy = AccessPolicy::HasRole(Role::Teacher);
    pub const STUDENT: AccessPolicy = AccessPolicy::HasRole(Role::Student);

    /// Whether the user row must be loaded to decide
    pub fn needs_user(&self) -> bool {
        !matches!(self, AccessPolicy::Any)
    }

    pub fn permits(&self, user: &User) -> bool {
        match self {
            AccessPolicy::Any => true,
            AccessPolicy::Admin => user.admin,
            AccessPolicy::HasRole(role) => user.role == *role,
        }
    }
}

/// Middleware state: the app handles plus the policy of the routes it guards
#[derive(Clone, Debug)]
pub struct AccessGuard {
    pub state: AppState,
    pub policy: AccessPolicy,
}

impl AccessGuard {
    pub fn new(state: AppState, policy: AccessPolicy) -> Self {
        Self { state, policy }
    }
}

/// Verifies the token, checks the guard's policy, then attaches `AuthUser`
pub async fn authorize(
    State(guard): State<AccessGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers())?;
    let user_id = guard.state.tokens.verify(&token)?;

    if guard.policy.needs_user() {
        let user = users::get_user(&guard.state.pool, user_id).await?.ok_or_else(|| {
            tracing::warn!("Token for unknown user {}", user_id);
            ApiError::unauthorized("User no longer exists")
        })?;

        if !guard.policy.permits(&user) {
            tracing::debug!("User {} denied by {:?}", user_id, guard.policy);
            return Err(ApiError::permission_denied());
        }
    }

    request.extensions_mut().insert(AuthUser { id: user_id });

    Ok(next.run(request).await)
}

/// Extract the token from the `auth-token` header
fn extract_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers.get(AUTH_HEADER).ok_or_else(ApiError::unauthenticated)?;

    let token = value.to_str().map_err(|_| ApiError::token_invalid())?.trim();
    if token.is_empty() {
        return Err(ApiError::unauthenticated());
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn user(role: Role, admin: bool) -> User {
        User {
            id: Uuid::new_v4(),
            firstname: "Test".to_string(),
            lastname: "User".to_string(),
            email: "test@example.com".to_string(),
            password: String::new(),
            role,
            admin,
            classroom: None,
        }
    }

    #[test]
    fn admin_flag_is_independent_of_role() {
        let teacher_admin = user(Role::Teacher, true);
        assert!(AccessPolicy::Admin.permits(&teacher_admin));
        assert!(AccessPolicy::TEACHER.permits(&teacher_admin));
        assert!(!AccessPolicy::STUDENT.permits(&teacher_admin));

        let student = user(Role::Student, false);
        assert!(!AccessPolicy::Admin.permits(&student));
        assert!(AccessPolicy::STUDENT.permits(&student));
        assert!(AccessPolicy::Any.permits(&student));
    }

    #[test]
    fn only_any_skips_the_user_lookup() {
        assert!(!AccessPolicy::Any.needs_user());
        assert!(AccessPolicy::Admin.needs_user());
        assert!(AccessPolicy::TEACHER.needs_user());
    }

    #[test]
    fn missing_or_blank_header_is_unauthenticated() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers).unwrap_err().message(), "No authentication token provided");

        headers.insert(AUTH_HEADER, HeaderValue::from_static("  "));
        assert!(extract_token(&headers).is_err());

        headers.insert(AUTH_HEADER, HeaderValue::from_static("abc.def.ghi"));
        assert_eq!(extract_token(&headers).unwrap(), "abc.def.ghi");
    }
}
