use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::balance::repo_types::DailyEnergyBalance;

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub user_id: Uuid,
    pub date: Date,
    pub calories_consumed: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub baseline_burn: i32,
    pub exercise_burn: i32,
    pub total_burned: i32,
    pub net_calories: i32,
}

impl From<DailyEnergyBalance> for BalanceResponse {
    fn from(b: DailyEnergyBalance) -> Self {
        Self {
            total_burned: b.total_burned(),
            net_calories: b.net_calories(),
            user_id: b.user_id,
            date: b.entry_date,
            calories_consumed: b.calories_consumed,
            protein_g: b.protein_g,
            carbs_g: b.carbs_g,
            fat_g: b.fat_g,
            baseline_burn: b.baseline_burn,
            exercise_burn: b.exercise_burn,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Date,
    pub end: Date,
}
