// handlers/admin/enrollments.rs - Association rows between users, subjects and classrooms

use axum::extract::State;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{ApiJson, ApiPath};
use crate::database::models::{Role, UserSubject};
use crate::database::queries::enrollments;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::EnrollmentService;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub user_id: Uuid,
    pub subject_id: Uuid,
    pub classroom_id: Uuid,
}

impl From<EnrollmentRequest> for UserSubject {
    fn from(req: EnrollmentRequest) -> Self {
        UserSubject {
            user_id: req.user_id,
            subject_id: req.subject_id,
            classroom_id: req.classroom_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeClassroomRequest {
    pub user_id: Uuid,
    pub classroom_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceSubjectsRequest {
    pub classroom_id: Uuid,
    #[serde(default)]
    pub subjects: Vec<Uuid>,
}

async fn add(state: &AppState, role: Role, request: EnrollmentRequest) -> ApiResult {
    let enrollment = UserSubject::from(request);
    enrollments::add_enrollment(&state.pool, &enrollment).await?;
    tracing::debug!(
        "Enrolled {} {} in subject {} (classroom {})",
        role,
        enrollment.user_id,
        enrollment.subject_id,
        enrollment.classroom_id
    );

    Ok(ApiResponse::message("Subject added successfully"))
}

async fn remove(state: &AppState, role: Role, request: EnrollmentRequest) -> ApiResult {
    let enrollment = UserSubject::from(request);
    let removed = enrollments::remove_enrollment(&state.pool, &enrollment).await?;
    tracing::debug!("Removed {} enrollment rows of {} {}", removed, role, enrollment.user_id);

    Ok(ApiResponse::message("Subject removed successfully"))
}

/// POST /api/admin/students/subjects/add
pub async fn student_subject_add(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EnrollmentRequest>,
) -> ApiResult {
    add(&state, Role::Student, payload).await
}

/// POST /api/admin/students/subjects/remove
pub async fn student_subject_remove(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EnrollmentRequest>,
) -> ApiResult {
    remove(&state, Role::Student, payload).await
}

/// POST /api/admin/teachers/subjects/add
pub async fn teacher_subject_add(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EnrollmentRequest>,
) -> ApiResult {
    add(&state, Role::Teacher, payload).await
}

/// POST /api/admin/teachers/subjects/remove
pub async fn teacher_subject_remove(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EnrollmentRequest>,
) -> ApiResult {
    remove(&state, Role::Teacher, payload).await
}

/// POST /api/admin/student/classrooms/change
///
/// Moves the student's association rows and profile classroom together.
pub async fn student_classroom_change(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ChangeClassroomRequest>,
) -> ApiResult {
    let changed =
        EnrollmentService::change_student_classroom(&state.pool, payload.user_id, payload.classroom_id).await?;
    if !changed {
        return Err(ApiError::not_found("Student not found"));
    }

    Ok(ApiResponse::message("Classroom changed successfully"))
}

/// PUT /api/admin/students/:id/subjects - Replace every subject of the student
pub async fn student_subjects_put(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ReplaceSubjectsRequest>,
) -> ApiResult<u64> {
    let inserted =
        EnrollmentService::replace_student_subjects(&state.pool, user_id, payload.classroom_id, &payload.subjects)
            .await?;

    Ok(ApiResponse::with("Subjects replaced successfully", "count", inserted))
}

/// GET /api/admin/teachers/data/:id - Every association row of the user
pub async fn teacher_data_get(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> ApiResult<Vec<UserSubject>> {
    let data = enrollments::get_user_enrollments(&state.pool, user_id).await?;

    Ok(ApiResponse::with("Subjects and classrooms retrieved successfully", "data", data))
}

/// GET /api/admin/subjects/:id - Distinct subject ids of user `:id`
pub async fn user_subjects_get(State(state): State<AppState>, ApiPath(user_id): ApiPath<Uuid>) -> ApiResult<Vec<Uuid>> {
    let subjects = enrollments::get_user_subjects(&state.pool, user_id).await?;

    Ok(ApiResponse::with("Subjects retrieved successfully", "subjects", subjects))
}

/// GET /api/admin/classrooms/:id - Distinct classroom ids of user `:id`
pub async fn user_classrooms_get(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> ApiResult<Vec<Uuid>> {
    let classrooms = enrollments::get_user_classrooms(&state.pool, user_id).await?;

    Ok(ApiResponse::with("Classrooms retrieved successfully", "classrooms", classrooms))
}
