use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// One exercise session, usually imported from the external activity
/// provider. `external_id` is unique per user: re-importing the same
/// provider activity updates the existing row instead of duplicating it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub external_id: String,
    pub category: String,
    pub calories_burned: i32,
    pub duration_secs: i32,
    pub distance_m: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    pub entry_date: Date,
}

/// The writable fields of an activity entry, keyed by `external_id` on
/// upsert.
#[derive(Debug, Clone)]
pub struct ActivityInput {
    pub external_id: String,
    pub category: String,
    pub calories_burned: i32,
    pub duration_secs: i32,
    pub distance_m: Option<f64>,
    pub started_at: OffsetDateTime,
    pub entry_date: Date,
}
