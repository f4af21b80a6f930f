// handlers/public/auth.rs - POST /api/auth/login handler

use axum::extract::State;
use serde::Deserialize;

use crate::api::ApiJson;
use crate::auth::password;
use crate::database::queries::users;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - Exchange email and password for a token
///
/// Expected Input:
/// ```json
/// { "email": "string", "password": "string" }
/// ```
///
/// Expected Output (Success):
/// ```json
/// { "message": "Login successful", "token": "eyJhbGciOiJIUzI1NiI..." }
/// ```
///
/// Unknown email or wrong password answer 400.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<String> {
    let user = users::find_by_email(&state.pool, &payload.email)
        .await?
        .ok_or_else(|| {
            tracing::info!("Login attempt for unknown email");
            ApiError::bad_request("Email provided is invalid")
        })?;

    let valid = password::verify_password_async(payload.password, user.password.clone()).await?;
    if !valid {
        tracing::info!("Login attempt with wrong password for user {}", user.id);
        return Err(ApiError::bad_request("Password provided is invalid"));
    }

    let token = state.tokens.issue(user.id)?;
    tracing::info!("User {} logged in", user.id);

    Ok(ApiResponse::with("Login successful", "token", token))
}
