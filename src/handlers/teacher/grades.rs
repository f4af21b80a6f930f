// handlers/teacher/grades.rs - Grade entry and lookup for teachers

use axum::extract::State;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{ApiJson, ApiPath};
use crate::database::models::{Grade, NewGrade, Role};
use crate::database::queries::{grades, users};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGradeRequest {
    pub value: f64,
    #[serde(default)]
    pub description: String,
    pub subject_id: Uuid,
    pub user_id: Uuid,
}

/// GET /api/teacher/grades/:studentId/:subjectId
pub async fn student_grades_get(
    State(state): State<AppState>,
    ApiPath((student_id, subject_id)): ApiPath<(Uuid, Uuid)>,
) -> ApiResult<Vec<Grade>> {
    let grades = grades::get_grades_by_user_and_subject(&state.pool, student_id, subject_id).await?;

    Ok(ApiResponse::with("Grades retrieved successfully", "grades", grades))
}

/// POST /api/grades - Record a grade for a student
///
/// Expected Input:
/// ```json
/// { "value": 9.5, "description": "string", "subjectId": "uuid", "userId": "uuid" }
/// ```
pub async fn grade_post(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateGradeRequest>,
) -> ApiResult<Grade> {
    if !payload.value.is_finite() {
        return Err(ApiError::bad_request("Grade value must be a number"));
    }

    let student = users::get_user(&state.pool, payload.user_id)
        .await?
        .ok_or_else(|| ApiError::bad_request("Referenced record does not exist"))?;
    if student.role != Role::Student {
        return Err(ApiError::bad_request("Grades can only be given to students"));
    }

    let grade = grades::create_grade(
        &state.pool,
        &NewGrade {
            value: payload.value,
            description: payload.description,
            subject_id: payload.subject_id,
            user_id: payload.user_id,
        },
    )
    .await?;
    tracing::info!("Grade {} recorded for user {}", grade.id, grade.user_id);

    Ok(ApiResponse::with("Grade created successfully", "grade", grade))
}
