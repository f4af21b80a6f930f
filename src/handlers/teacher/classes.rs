use axum::{extract::State, Extension};
use uuid::Uuid;

use crate::api::ApiPath;
use crate::database::models::{User, UserSubject};
use crate::database::queries::{enrollments, users};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/subjects/classrooms/:id - Classrooms where the caller teaches subject `:id`
pub async fn classrooms_by_subject_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiPath(subject_id): ApiPath<Uuid>,
) -> ApiResult<Vec<Uuid>> {
    let classrooms = enrollments::get_teacher_classrooms_by_subject(&state.pool, auth.id, subject_id).await?;

    Ok(ApiResponse::with("Classrooms retrieved successfully", "classrooms", classrooms))
}

/// GET /api/students/:classroomId/:subjectId - Enrollment rows of the class
pub async fn classroom_students_get(
    State(state): State<AppState>,
    ApiPath((classroom_id, subject_id)): ApiPath<(Uuid, Uuid)>,
) -> ApiResult<Vec<UserSubject>> {
    let students = enrollments::get_classroom_students(&state.pool, classroom_id, subject_id).await?;

    Ok(ApiResponse::with("Students retrieved successfully", "students", students))
}

/// GET /api/teacher/students/:id
pub async fn student_get(State(state): State<AppState>, ApiPath(user_id): ApiPath<Uuid>) -> ApiResult<User> {
    let user = users::get_user(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::with("User retrieved successfully", "user", user))
}
