use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Grade, NewGrade};

const GRADE_COLUMNS: &str = "id, value, description, subject_id, user_id, created_at";

pub async fn create_grade<'e, E>(db: E, grade: &NewGrade) -> Result<Grade, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let created = sqlx::query_as::<_, Grade>(&format!(
        "INSERT INTO grades (id, value, description, subject_id, user_id) VALUES ($1, $2, $3, $4, $5) \
         RETURNING {GRADE_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(grade.value)
    .bind(&grade.description)
    .bind(grade.subject_id)
    .bind(grade.user_id)
    .fetch_one(db)
    .await?;

    Ok(created)
}

pub async fn get_grades_by_user_and_subject<'e, E>(
    db: E,
    user_id: Uuid,
    subject_id: Uuid,
) -> Result<Vec<Grade>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let grades = sqlx::query_as::<_, Grade>(&format!(
        "SELECT {GRADE_COLUMNS} FROM grades WHERE user_id = $1 AND subject_id = $2 ORDER BY created_at, id"
    ))
    .bind(user_id)
    .bind(subject_id)
    .fetch_all(db)
    .await?;

    Ok(grades)
}
