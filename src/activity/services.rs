use std::collections::BTreeSet;

use tracing::debug;
use uuid::Uuid;

use crate::activity::dto::ProviderActivity;
use crate::activity::repo_types::ActivityInput;
use crate::error::BalanceError;
use crate::state::AppState;

/// Assumed body weight when the profile has none yet.
const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Rough MET values per provider category; unknown categories fall back
/// to a middle-of-the-road effort.
fn met_for(category: &str) -> f64 {
    match category {
        "running" => 9.8,
        "cycling" => 7.5,
        "swimming" => 8.0,
        "walking" => 3.5,
        "hiking" => 6.0,
        "strength_training" => 6.0,
        _ => 5.0,
    }
}

/// Estimates calories for a session the provider left unpriced:
/// `MET × weight × hours`.
pub fn estimate_calories(category: &str, duration_secs: i32, weight_kg: f64) -> i32 {
    let hours = f64::from(duration_secs.max(0)) / 3600.0;
    (met_for(category) * weight_kg * hours).round() as i32
}

#[derive(Debug)]
pub struct SyncOutcome {
    pub imported: usize,
    pub recomputed_dates: usize,
}

/// Ingests a batch of provider activities: upserts each by external id,
/// then recomputes each distinct affected date exactly once.
pub async fn ingest_batch(
    state: &AppState,
    user_id: Uuid,
    batch: Vec<ProviderActivity>,
) -> Result<SyncOutcome, BalanceError> {
    let profile = state
        .profiles
        .get(user_id)
        .await
        .map_err(BalanceError::AggregationRead)?
        .ok_or(BalanceError::UnknownUser(user_id))?;
    let weight_kg = profile.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG);

    let mut dates = BTreeSet::new();
    let mut imported = 0usize;
    for activity in batch {
        if activity.duration_secs < 0 {
            return Err(BalanceError::InvalidInput(format!(
                "duration must be non-negative, got {}",
                activity.duration_secs
            )));
        }
        if matches!(activity.calories_burned, Some(c) if c < 0) {
            return Err(BalanceError::InvalidInput(
                "calories burned must be non-negative".into(),
            ));
        }

        let calories_burned = activity.calories_burned.unwrap_or_else(|| {
            estimate_calories(&activity.category, activity.duration_secs, weight_kg)
        });

        let input = ActivityInput {
            external_id: activity.external_id,
            category: activity.category,
            calories_burned,
            duration_secs: activity.duration_secs,
            distance_m: activity.distance_m,
            started_at: activity.started_at,
            entry_date: activity.entry_date,
        };
        let stored = state
            .activity
            .upsert_external(user_id, &input)
            .await
            .map_err(BalanceError::Persistence)?;
        dates.insert(stored.entry_date);
        imported += 1;
    }

    let balances = state
        .controller()
        .recompute_for_activity_change(user_id, dates)
        .await?;
    debug!(%user_id, imported, recomputed = balances.len(), "activity sync ingested");

    Ok(SyncOutcome {
        imported,
        recomputed_dates: balances.len(),
    })
}
