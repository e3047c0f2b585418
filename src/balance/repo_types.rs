use serde::Serialize;
use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

/// The aggregation result for one (user, date), before persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceDraft {
    pub calories_consumed: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub baseline_burn: i32,
    pub exercise_burn: i32,
}

impl BalanceDraft {
    pub fn into_balance(self, user_id: Uuid, entry_date: Date) -> DailyEnergyBalance {
        DailyEnergyBalance {
            user_id,
            entry_date,
            calories_consumed: self.calories_consumed,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            baseline_burn: self.baseline_burn,
            exercise_burn: self.exercise_burn,
        }
    }

    pub fn total_burned(&self) -> i32 {
        self.baseline_burn + self.exercise_burn
    }

    pub fn net_calories(&self) -> i32 {
        self.calories_consumed - self.total_burned()
    }
}

/// The materialized daily aggregate, one row per (user, date), fully
/// replaced on every recomputation.
///
/// Total burned and net calories are deliberately methods rather than
/// stored fields: they can never drift from the figures they derive from.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DailyEnergyBalance {
    pub user_id: Uuid,
    pub entry_date: Date,
    pub calories_consumed: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub baseline_burn: i32,
    pub exercise_burn: i32,
}

impl DailyEnergyBalance {
    pub fn total_burned(&self) -> i32 {
        self.baseline_burn + self.exercise_burn
    }

    pub fn net_calories(&self) -> i32 {
        self.calories_consumed - self.total_burned()
    }
}
