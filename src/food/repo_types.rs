use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// One logged instance of food consumption. Calories and macros are per
/// single serving; the contribution to a day's total is value × serving
/// multiplier.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FoodLogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub calories: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub serving_multiplier: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub consumed_at: OffsetDateTime,
    /// Calendar date in the user's reference day boundary, normalized by
    /// the caller. All aggregation buckets on this field.
    pub entry_date: Date,
}

/// The writable fields of a food entry, used for insert and full update.
#[derive(Debug, Clone)]
pub struct FoodEntryInput {
    pub name: String,
    pub calories: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub serving_multiplier: f64,
    pub consumed_at: OffsetDateTime,
    pub entry_date: Date,
}
