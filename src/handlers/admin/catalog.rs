// handlers/admin/catalog.rs - Classrooms and subjects

use axum::extract::State;
use serde::Deserialize;

use super::validation::require_text;
use crate::api::ApiJson;
use crate::database::models::{Classroom, Subject};
use crate::database::queries::{classrooms, subjects};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

impl NameRequest {
    fn validated(&self) -> Result<&str, ApiError> {
        require_text("Name", &self.name).map_err(ApiError::bad_request)?;
        Ok(self.name.trim())
    }
}

/// GET /api/admin/classrooms
pub async fn classrooms_get(State(state): State<AppState>) -> ApiResult<Vec<Classroom>> {
    let classrooms = classrooms::get_classrooms(&state.pool).await?;

    Ok(ApiResponse::with("Classrooms retrieved successfully", "classrooms", classrooms))
}

/// POST /api/admin/classrooms
pub async fn classroom_post(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NameRequest>,
) -> ApiResult<Classroom> {
    let classroom = classrooms::create_classroom(&state.pool, payload.validated()?).await?;
    tracing::info!("Created classroom {} ({})", classroom.name, classroom.id);

    Ok(ApiResponse::with("Classroom created successfully", "classroom", classroom))
}

/// GET /api/admin/subjects
pub async fn subjects_get(State(state): State<AppState>) -> ApiResult<Vec<Subject>> {
    let subjects = subjects::get_subjects(&state.pool).await?;

    Ok(ApiResponse::with("Subjects retrieved successfully", "subjects", subjects))
}

/// POST /api/admin/subjects
pub async fn subject_post(State(state): State<AppState>, ApiJson(payload): ApiJson<NameRequest>) -> ApiResult<Subject> {
    let subject = subjects::create_subject(&state.pool, payload.validated()?).await?;
    tracing::info!("Created subject {} ({})", subject.name, subject.id);

    Ok(ApiResponse::with("Subject created successfully", "subject", subject))
}
