use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Classroom;

pub async fn get_classroom<'e, E>(db: E, classroom_id: Uuid) -> Result<Option<Classroom>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let classroom = sqlx::query_as::<_, Classroom>("SELECT id, name FROM classrooms WHERE id = $1")
        .bind(classroom_id)
        .fetch_optional(db)
        .await?;

    Ok(classroom)
}

pub async fn get_classrooms<'e, E>(db: E) -> Result<Vec<Classroom>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let classrooms = sqlx::query_as::<_, Classroom>("SELECT id, name FROM classrooms ORDER BY name")
        .fetch_all(db)
        .await?;

    Ok(classrooms)
}

pub async fn create_classroom<'e, E>(db: E, name: &str) -> Result<Classroom, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let classroom =
        sqlx::query_as::<_, Classroom>("INSERT INTO classrooms (id, name) VALUES ($1, $2) RETURNING id, name")
            .bind(Uuid::new_v4())
            .bind(name)
            .fetch_one(db)
            .await?;

    Ok(classroom)
}
