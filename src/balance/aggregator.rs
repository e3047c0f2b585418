use std::sync::Arc;

use time::Date;
use uuid::Uuid;

use crate::activity::repo::ActivityLedger;
use crate::balance::repo_types::BalanceDraft;
use crate::error::BalanceError;
use crate::food::repo::FoodLedger;
use crate::profile::repo::ProfileStore;

/// Computes a complete daily energy balance for one (user, date) from the
/// ledger collaborators. Pure aggregation: reads everything it needs, never
/// writes, and either returns a fully populated draft or fails — there is
/// no partial result.
pub struct Aggregator {
    profiles: Arc<dyn ProfileStore>,
    food: Arc<dyn FoodLedger>,
    activity: Arc<dyn ActivityLedger>,
    baseline_fallback_kcal: f64,
}

impl Aggregator {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        food: Arc<dyn FoodLedger>,
        activity: Arc<dyn ActivityLedger>,
        baseline_fallback_kcal: f64,
    ) -> Self {
        Self {
            profiles,
            food,
            activity,
            baseline_fallback_kcal,
        }
    }

    pub async fn aggregate(
        &self,
        user_id: Uuid,
        date: Date,
    ) -> Result<BalanceDraft, BalanceError> {
        let profile = self
            .profiles
            .get(user_id)
            .await
            .map_err(BalanceError::AggregationRead)?
            .ok_or(BalanceError::UnknownUser(user_id))?;

        let foods = self
            .food
            .list_for_date(user_id, date)
            .await
            .map_err(BalanceError::AggregationRead)?;
        let activities = self
            .activity
            .list_for_date(user_id, date)
            .await
            .map_err(BalanceError::AggregationRead)?;

        let mut calories = 0.0;
        let mut protein_g = 0.0;
        let mut carbs_g = 0.0;
        let mut fat_g = 0.0;
        for entry in &foods {
            calories += f64::from(entry.calories) * entry.serving_multiplier;
            protein_g += entry.protein_g * entry.serving_multiplier;
            carbs_g += entry.carbs_g * entry.serving_multiplier;
            fat_g += entry.fat_g * entry.serving_multiplier;
        }

        let exercise_burn: i32 = activities.iter().map(|a| a.calories_burned).sum();

        let baseline = profile
            .baseline_kcal()
            .unwrap_or(self.baseline_fallback_kcal);

        Ok(BalanceDraft {
            calories_consumed: calories.round() as i32,
            protein_g,
            carbs_g,
            fat_g,
            baseline_burn: baseline.round() as i32,
            exercise_burn,
        })
    }
}
