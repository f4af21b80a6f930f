// handlers/protected/profile.rs - GET /api/auth/user handler

use axum::{extract::State, Extension};

use crate::database::models::User;
use crate::database::queries::users;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/auth/user - Profile of the caller
pub async fn user_get(State(state): State<AppState>, Extension(auth): Extension<AuthUser>) -> ApiResult<User> {
    let user = users::get_user(&state.pool, auth.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::with("User retrieved successfully", "user", user))
}
