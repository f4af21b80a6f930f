// handlers/admin/users.rs - User management for administrators

use axum::extract::State;
use serde::{de::Error as _, Deserialize, Deserializer};
use uuid::Uuid;

use super::validation::{require_text, validate_email_format, validate_password};
use crate::api::{ApiJson, ApiPath};
use crate::auth::password;
use crate::database::models::{NewUser, ProfileUpdate, Role, User};
use crate::database::queries::users;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::EnrollmentService;
use crate::state::AppState;

/// Accepts `true`/`false` as well as the `1`/`0` older clients send
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => Ok(flag),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(D::Error::custom(format!("invalid admin flag {}, expected 0 or 1", other))),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub admin: bool,
    #[serde(default)]
    pub classroom: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub admin: bool,
    /// Student update only; absent keeps the current classroom
    #[serde(default)]
    pub classroom: Option<Uuid>,
}

impl UpdateProfileRequest {
    fn validate(&self) -> Result<ProfileUpdate, ApiError> {
        require_text("Firstname", &self.firstname).map_err(ApiError::bad_request)?;
        require_text("Lastname", &self.lastname).map_err(ApiError::bad_request)?;
        validate_email_format(&self.email).map_err(ApiError::bad_request)?;

        Ok(ProfileUpdate {
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            email: self.email.trim().to_string(),
            admin: self.admin,
        })
    }
}

fn map_duplicate_email(err: crate::database::DatabaseError) -> ApiError {
    if err.is_unique_violation() {
        ApiError::conflict("Email is already in use")
    } else {
        err.into()
    }
}

/// GET /api/admin/users/:id
pub async fn user_get(State(state): State<AppState>, ApiPath(user_id): ApiPath<Uuid>) -> ApiResult<User> {
    let user = users::get_user(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::with("User retrieved successfully", "user", user))
}

/// POST /api/admin/users - Register a new student or teacher
///
/// Expected Input:
/// ```json
/// {
///   "firstname": "string", "lastname": "string",
///   "email": "string", "password": "string",
///   "role": "student" | "teacher",
///   "admin": false,
///   "classroom": "uuid" | null
/// }
/// ```
pub async fn user_post(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> ApiResult<User> {
    require_text("Firstname", &payload.firstname).map_err(ApiError::bad_request)?;
    require_text("Lastname", &payload.lastname).map_err(ApiError::bad_request)?;
    validate_email_format(&payload.email).map_err(ApiError::bad_request)?;
    validate_password(&payload.password).map_err(ApiError::bad_request)?;

    let hashed = password::hash_password_async(payload.password).await?;

    let user = users::create_user(
        &state.pool,
        &NewUser {
            firstname: payload.firstname.trim().to_string(),
            lastname: payload.lastname.trim().to_string(),
            email: payload.email.trim().to_string(),
            password: hashed,
            role: payload.role,
            admin: payload.admin,
            classroom: payload.classroom,
        },
    )
    .await
    .map_err(map_duplicate_email)?;
    tracing::info!("Registered {} {} (admin: {})", user.role, user.id, user.admin);

    Ok(ApiResponse::with("User registered successfully", "user", user))
}

/// GET /api/admin/students
pub async fn students_get(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let students = users::get_students(&state.pool).await?;

    Ok(ApiResponse::with("Students retrieved successfully", "students", students))
}

/// GET /api/admin/teachers
pub async fn teachers_get(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let teachers = users::get_teachers(&state.pool).await?;

    Ok(ApiResponse::with("Teachers retrieved successfully", "teachers", teachers))
}

/// GET /api/admin/students/:id - Students whose profile classroom is `:id`
pub async fn classroom_students_get(
    State(state): State<AppState>,
    ApiPath(classroom_id): ApiPath<Uuid>,
) -> ApiResult<Vec<User>> {
    let students = users::get_students_of_classroom(&state.pool, classroom_id).await?;

    Ok(ApiResponse::with("Students retrieved successfully", "students", students))
}

/// PUT /api/admin/students/:id - Update a student; enrollments follow a new classroom
pub async fn student_put(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> ApiResult {
    let profile = payload.validate()?;

    let updated = EnrollmentService::update_student(&state.pool, user_id, &profile, payload.classroom)
        .await
        .map_err(map_duplicate_email)?;
    if !updated {
        return Err(ApiError::not_found("Student not found"));
    }

    Ok(ApiResponse::message("User data updated successfully"))
}

/// PUT /api/admin/teachers/:id
pub async fn teacher_put(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> ApiResult {
    let profile = payload.validate()?;

    let updated = users::update_teacher(&state.pool, user_id, &profile)
        .await
        .map_err(map_duplicate_email)?;
    if updated == 0 {
        return Err(ApiError::not_found("Teacher not found"));
    }

    Ok(ApiResponse::message("User data updated successfully"))
}
