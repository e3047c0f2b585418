use serde::Deserialize;
use time::{Date, OffsetDateTime};

#[derive(Debug, Deserialize)]
pub struct FoodEntryRequest {
    pub name: String,
    pub calories: i32,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fat_g: f64,
    #[serde(default = "default_serving_multiplier")]
    pub serving_multiplier: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub consumed_at: OffsetDateTime,
    pub entry_date: Date,
}

fn default_serving_multiplier() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Date,
}
