use axum::{extract::State, Extension};
use uuid::Uuid;

use crate::api::ApiPath;
use crate::database::models::{Classroom, Grade, Subject};
use crate::database::queries::{classrooms, enrollments, grades, subjects};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/subjects - Distinct subject ids the caller is enrolled in or teaches
pub async fn subjects_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<Uuid>> {
    let subjects = enrollments::get_user_subjects(&state.pool, auth.id).await?;

    Ok(ApiResponse::with("Subjects retrieved successfully", "subjects", subjects))
}

/// GET /api/grades/:id - The caller's grades in subject `:id`
pub async fn grades_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiPath(subject_id): ApiPath<Uuid>,
) -> ApiResult<Vec<Grade>> {
    let grades = grades::get_grades_by_user_and_subject(&state.pool, auth.id, subject_id).await?;

    Ok(ApiResponse::with("Grades retrieved successfully", "grades", grades))
}

/// GET /api/subjects/:id
pub async fn subject_get(State(state): State<AppState>, ApiPath(subject_id): ApiPath<Uuid>) -> ApiResult<Subject> {
    let subject = subjects::get_subject(&state.pool, subject_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Subject not found"))?;

    Ok(ApiResponse::with("Subject retrieved successfully", "subject", subject))
}

/// GET /api/classrooms/:id
pub async fn classroom_get(
    State(state): State<AppState>,
    ApiPath(classroom_id): ApiPath<Uuid>,
) -> ApiResult<Classroom> {
    let classroom = classrooms::get_classroom(&state.pool, classroom_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Classroom not found"))?;

    Ok(ApiResponse::with("Classroom retrieved successfully", "classroom", classroom))
}
