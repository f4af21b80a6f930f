use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewUser, ProfileUpdate, Role, User};

const USER_COLUMNS: &str = "id, firstname, lastname, email, password, role, admin, classroom";

pub async fn get_user<'e, E>(db: E, user_id: Uuid) -> Result<Option<User>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(user_id)
        .fetch_optional(db)
        .await?;

    Ok(user)
}

pub async fn find_by_email<'e, E>(db: E, email: &str) -> Result<Option<User>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
        .bind(email)
        .fetch_optional(db)
        .await?;

    Ok(user)
}

pub async fn create_user<'e, E>(db: E, new_user: &NewUser) -> Result<User, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users ({USER_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {USER_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(&new_user.firstname)
    .bind(&new_user.lastname)
    .bind(&new_user.email)
    .bind(&new_user.password)
    .bind(new_user.role)
    .bind(new_user.admin)
    .bind(new_user.classroom)
    .fetch_one(db)
    .await?;

    Ok(user)
}

async fn get_users_by_role<'e, E>(db: E, role: Role) -> Result<Vec<User>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY lastname, firstname"
    ))
    .bind(role)
    .fetch_all(db)
    .await?;

    Ok(users)
}

pub async fn get_students<'e, E>(db: E) -> Result<Vec<User>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    get_users_by_role(db, Role::Student).await
}

pub async fn get_teachers<'e, E>(db: E) -> Result<Vec<User>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    get_users_by_role(db, Role::Teacher).await
}

/// Users whose profile points at the classroom
pub async fn get_students_of_classroom<'e, E>(db: E, classroom_id: Uuid) -> Result<Vec<User>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE classroom = $1 ORDER BY lastname, firstname"
    ))
    .bind(classroom_id)
    .fetch_all(db)
    .await?;

    Ok(users)
}

/// Returns the number of rows touched (0 when no student has this id).
/// A `None` classroom keeps the current one.
pub async fn update_student<'e, E>(
    db: E,
    user_id: Uuid,
    profile: &ProfileUpdate,
    classroom: Option<Uuid>,
) -> Result<u64, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE users SET firstname = $1, lastname = $2, email = $3, admin = $4, \
         classroom = COALESCE($5, classroom) \
         WHERE id = $6 AND role = 'student'",
    )
    .bind(&profile.firstname)
    .bind(&profile.lastname)
    .bind(&profile.email)
    .bind(profile.admin)
    .bind(classroom)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

/// Returns the number of rows touched (0 when no teacher has this id)
pub async fn update_teacher<'e, E>(db: E, user_id: Uuid, profile: &ProfileUpdate) -> Result<u64, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE users SET firstname = $1, lastname = $2, email = $3, admin = $4 \
         WHERE id = $5 AND role = 'teacher'",
    )
    .bind(&profile.firstname)
    .bind(&profile.lastname)
    .bind(&profile.email)
    .bind(profile.admin)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

/// Profile classroom of a student; 0 rows when no student has this id
pub async fn set_classroom<'e, E>(db: E, user_id: Uuid, classroom_id: Uuid) -> Result<u64, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("UPDATE users SET classroom = $1 WHERE id = $2 AND role = 'student'")
        .bind(classroom_id)
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
