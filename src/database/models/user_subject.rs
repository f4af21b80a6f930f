use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Association row: a user enrolled in (or teaching) a subject within a classroom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserSubject {
    pub user_id: Uuid,
    pub subject_id: Uuid,
    pub classroom_id: Uuid,
}
