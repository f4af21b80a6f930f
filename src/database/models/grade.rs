use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A grade given to a student (`user_id`) in a subject. Never updated once written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Grade {
    pub id: Uuid,
    pub value: f64,
    pub description: String,
    pub subject_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGrade {
    pub value: f64,
    pub description: String,
    pub subject_id: Uuid,
    pub user_id: Uuid,
}
