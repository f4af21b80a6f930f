use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Subject;

pub async fn get_subject<'e, E>(db: E, subject_id: Uuid) -> Result<Option<Subject>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let subject = sqlx::query_as::<_, Subject>("SELECT id, name FROM subjects WHERE id = $1")
        .bind(subject_id)
        .fetch_optional(db)
        .await?;

    Ok(subject)
}

pub async fn get_subjects<'e, E>(db: E) -> Result<Vec<Subject>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let subjects = sqlx::query_as::<_, Subject>("SELECT id, name FROM subjects ORDER BY name")
        .fetch_all(db)
        .await?;

    Ok(subjects)
}

pub async fn create_subject<'e, E>(db: E, name: &str) -> Result<Subject, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let subject = sqlx::query_as::<_, Subject>("INSERT INTO subjects (id, name) VALUES ($1, $2) RETURNING id, name")
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(db)
        .await?;

    Ok(subject)
}
