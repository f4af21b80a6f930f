use std::collections::HashSet;

use sqlx::{PgConnection, PgExecutor, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::UserSubject;

// Three binds per row; stays well below the 65535 parameter limit.
const BULK_INSERT_CHUNK: usize = 1000;

/// Distinct ids in first-seen order
pub fn distinct_ids(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Every association row of a user
pub async fn get_user_enrollments<'e, E>(db: E, user_id: Uuid) -> Result<Vec<UserSubject>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, UserSubject>(
        "SELECT user_id, subject_id, classroom_id FROM user_subjects WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get_user_subjects<'e, E>(db: E, user_id: Uuid) -> Result<Vec<Uuid>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let rows = get_user_enrollments(db, user_id).await?;
    Ok(distinct_ids(rows.iter().map(|row| row.subject_id)))
}

pub async fn get_user_classrooms<'e, E>(db: E, user_id: Uuid) -> Result<Vec<Uuid>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let rows = get_user_enrollments(db, user_id).await?;
    Ok(distinct_ids(rows.iter().map(|row| row.classroom_id)))
}

/// Classrooms in which the user is attached to the subject
pub async fn get_teacher_classrooms_by_subject<'e, E>(
    db: E,
    user_id: Uuid,
    subject_id: Uuid,
) -> Result<Vec<Uuid>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, UserSubject>(
        "SELECT user_id, subject_id, classroom_id FROM user_subjects WHERE user_id = $1 AND subject_id = $2",
    )
    .bind(user_id)
    .bind(subject_id)
    .fetch_all(db)
    .await?;

    Ok(distinct_ids(rows.iter().map(|row| row.classroom_id)))
}

/// Association rows of the students following a subject in a classroom.
/// Rows belonging to teachers of the same class are left out.
pub async fn get_classroom_students<'e, E>(
    db: E,
    classroom_id: Uuid,
    subject_id: Uuid,
) -> Result<Vec<UserSubject>, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, UserSubject>(
        "SELECT us.user_id, us.subject_id, us.classroom_id \
         FROM user_subjects us \
         JOIN users u ON u.id = us.user_id \
         WHERE us.classroom_id = $1 AND us.subject_id = $2 AND u.role = 'student' \
         ORDER BY u.lastname, u.firstname",
    )
    .bind(classroom_id)
    .bind(subject_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn add_enrollment<'e, E>(db: E, enrollment: &UserSubject) -> Result<(), DatabaseError>
where
    E: PgExecutor<'e>,
{
    sqlx::query("INSERT INTO user_subjects (user_id, subject_id, classroom_id) VALUES ($1, $2, $3)")
        .bind(enrollment.user_id)
        .bind(enrollment.subject_id)
        .bind(enrollment.classroom_id)
        .execute(db)
        .await?;

    Ok(())
}

/// Removes every copy of the triple
pub async fn remove_enrollment<'e, E>(db: E, enrollment: &UserSubject) -> Result<u64, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let result =
        sqlx::query("DELETE FROM user_subjects WHERE user_id = $1 AND subject_id = $2 AND classroom_id = $3")
            .bind(enrollment.user_id)
            .bind(enrollment.subject_id)
            .bind(enrollment.classroom_id)
            .execute(db)
            .await?;

    Ok(result.rows_affected())
}

pub async fn remove_user_enrollments<'e, E>(db: E, user_id: Uuid) -> Result<u64, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM user_subjects WHERE user_id = $1")
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

/// Inserts one row per subject with bound parameters, in chunks
pub async fn add_subjects_to_student(
    conn: &mut PgConnection,
    user_id: Uuid,
    classroom_id: Uuid,
    subjects: &[Uuid],
) -> Result<u64, DatabaseError> {
    let mut inserted = 0;

    for chunk in subjects.chunks(BULK_INSERT_CHUNK) {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO user_subjects (user_id, subject_id, classroom_id) ");
        builder.push_values(chunk, |mut row, subject_id| {
            row.push_bind(user_id).push_bind(*subject_id).push_bind(classroom_id);
        });

        inserted += builder.build().execute(&mut *conn).await?.rows_affected();
    }

    Ok(inserted)
}

/// Points every association row of the user at a new classroom
pub async fn move_user_to_classroom<'e, E>(db: E, user_id: Uuid, classroom_id: Uuid) -> Result<u64, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("UPDATE user_subjects SET classroom_id = $1 WHERE user_id = $2")
        .bind(classroom_id)
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{NewUser, Role};
    use crate::database::queries::{classrooms, subjects, users};
    use sqlx::PgPool;

    async fn seed_user(pool: &PgPool, email: &str, role: Role) -> Uuid {
        users::create_user(
            pool,
            &NewUser {
                firstname: "Test".to_string(),
                lastname: email.to_string(),
                email: email.to_string(),
                password: "x".to_string(),
                role,
                admin: false,
                classroom: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[test]
    fn distinct_ids_keeps_first_occurrence_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        assert_eq!(distinct_ids(vec![b, a, b, c, a]), vec![b, a, c]);
        assert!(distinct_ids(Vec::new()).is_empty());
    }

    #[sqlx::test]
    async fn duplicate_rows_project_to_distinct_ids(pool: PgPool) {
        let teacher = seed_user(&pool, "t@example.com", Role::Teacher).await;
        let math = subjects::create_subject(&pool, "Math").await.unwrap().id;
        let art = subjects::create_subject(&pool, "Art").await.unwrap().id;
        let room_a = classrooms::create_classroom(&pool, "A").await.unwrap().id;
        let room_b = classrooms::create_classroom(&pool, "B").await.unwrap().id;

        for (subject_id, classroom_id) in [(math, room_a), (math, room_b), (math, room_a), (art, room_b)] {
            add_enrollment(&pool, &UserSubject { user_id: teacher, subject_id, classroom_id })
                .await
                .unwrap();
        }

        let mut subject_ids = get_user_subjects(&pool, teacher).await.unwrap();
        subject_ids.sort();
        let mut expected = vec![math, art];
        expected.sort();
        assert_eq!(subject_ids, expected);

        let mut classroom_ids = get_user_classrooms(&pool, teacher).await.unwrap();
        classroom_ids.sort();
        let mut expected = vec![room_a, room_b];
        expected.sort();
        assert_eq!(classroom_ids, expected);

        let mut math_rooms = get_teacher_classrooms_by_subject(&pool, teacher, math).await.unwrap();
        math_rooms.sort();
        assert_eq!(math_rooms, expected);
        assert_eq!(get_teacher_classrooms_by_subject(&pool, teacher, art).await.unwrap(), vec![room_b]);

        assert_eq!(get_user_enrollments(&pool, teacher).await.unwrap().len(), 4);
    }

    #[sqlx::test]
    async fn remove_enrollment_deletes_all_copies(pool: PgPool) {
        let student = seed_user(&pool, "s@example.com", Role::Student).await;
        let subject_id = subjects::create_subject(&pool, "Music").await.unwrap().id;
        let classroom_id = classrooms::create_classroom(&pool, "C").await.unwrap().id;
        let row = UserSubject { user_id: student, subject_id, classroom_id };

        add_enrollment(&pool, &row).await.unwrap();
        add_enrollment(&pool, &row).await.unwrap();

        assert_eq!(remove_enrollment(&pool, &row).await.unwrap(), 2);
        assert!(get_user_enrollments(&pool, student).await.unwrap().is_empty());
    }

    #[sqlx::test]
    async fn classroom_students_excludes_teachers(pool: PgPool) {
        let student = seed_user(&pool, "pupil@example.com", Role::Student).await;
        let teacher = seed_user(&pool, "prof@example.com", Role::Teacher).await;
        let subject_id = subjects::create_subject(&pool, "Latin").await.unwrap().id;
        let classroom_id = classrooms::create_classroom(&pool, "D").await.unwrap().id;

        for user_id in [student, teacher] {
            add_enrollment(&pool, &UserSubject { user_id, subject_id, classroom_id })
                .await
                .unwrap();
        }

        let rows = get_classroom_students(&pool, classroom_id, subject_id).await.unwrap();
        assert_eq!(rows, vec![UserSubject { user_id: student, subject_id, classroom_id }]);
    }

    #[sqlx::test]
    async fn bulk_insert_binds_every_subject(pool: PgPool) {
        let student = seed_user(&pool, "bulk@example.com", Role::Student).await;
        let classroom_id = classrooms::create_classroom(&pool, "E").await.unwrap().id;
        let mut subject_ids = Vec::new();
        for name in ["Math", "Art", "Drama"] {
            subject_ids.push(subjects::create_subject(&pool, name).await.unwrap().id);
        }

        let mut conn = pool.acquire().await.unwrap();
        let inserted = add_subjects_to_student(&mut conn, student, classroom_id, &subject_ids)
            .await
            .unwrap();
        assert_eq!(inserted, 3);
        assert_eq!(add_subjects_to_student(&mut conn, student, classroom_id, &[]).await.unwrap(), 0);

        let mut stored = get_user_subjects(&pool, student).await.unwrap();
        stored.sort();
        subject_ids.sort();
        assert_eq!(stored, subject_ids);
    }
}
