use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::ProfileUpdate;
use crate::database::queries::{enrollments, users};

/// Multi-statement enrollment changes. Each operation runs in a single
/// transaction; dropping the transaction on an early `?` rolls it back.
pub struct EnrollmentService;

impl EnrollmentService {
    /// Move a student to another classroom, in both the association rows and
    /// the profile. Returns false, with nothing changed, when no student has
    /// this id.
    pub async fn change_student_classroom(
        pool: &PgPool,
        user_id: Uuid,
        classroom_id: Uuid,
    ) -> Result<bool, DatabaseError> {
        let mut tx = pool.begin().await?;

        let moved = enrollments::move_user_to_classroom(&mut *tx, user_id, classroom_id).await?;
        let updated = users::set_classroom(&mut *tx, user_id, classroom_id).await?;

        if updated == 0 {
            debug!("No user {} to move, rolling back", user_id);
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        info!("Moved user {} to classroom {} ({} enrollments)", user_id, classroom_id, moved);
        Ok(true)
    }

    /// Replace every subject of a student with `subjects`, all in `classroom_id`
    pub async fn replace_student_subjects(
        pool: &PgPool,
        user_id: Uuid,
        classroom_id: Uuid,
        subjects: &[Uuid],
    ) -> Result<u64, DatabaseError> {
        let mut tx = pool.begin().await?;

        let removed = enrollments::remove_user_enrollments(&mut *tx, user_id).await?;
        let inserted = enrollments::add_subjects_to_student(&mut tx, user_id, classroom_id, subjects).await?;

        tx.commit().await?;
        info!(
            "Replaced subjects of user {}: {} removed, {} inserted",
            user_id, removed, inserted
        );
        Ok(inserted)
    }

    /// Update a student's profile. When a classroom is given, the association
    /// rows follow it; otherwise both keep the current classroom. Returns
    /// false, with nothing changed, when no student has this id.
    pub async fn update_student(
        pool: &PgPool,
        user_id: Uuid,
        profile: &ProfileUpdate,
        classroom: Option<Uuid>,
    ) -> Result<bool, DatabaseError> {
        let mut tx = pool.begin().await?;

        let updated = users::update_student(&mut *tx, user_id, profile, classroom).await?;
        if updated == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        if let Some(classroom_id) = classroom {
            enrollments::move_user_to_classroom(&mut *tx, user_id, classroom_id).await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
