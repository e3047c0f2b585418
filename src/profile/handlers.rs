use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::BalanceError;
use crate::profile::dto::ProfileUpdateRequest;
use crate::profile::repo_types::{ProfileInputs, UserProfile};
use crate::profile::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/users/:user_id/profile", get(get_profile).put(put_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserProfile>, BalanceError> {
    let profile = state
        .profiles
        .get(user_id)
        .await
        .map_err(BalanceError::AggregationRead)?
        .ok_or(BalanceError::UnknownUser(user_id))?;
    Ok(Json(profile))
}

/// Replaces the physical inputs, re-derives BMR/TDEE (or clears them if
/// the profile is incomplete), then recomputes the trailing window of
/// daily balances since the baseline burn may have changed.
#[instrument(skip(state, body))]
pub async fn put_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<ProfileUpdateRequest>,
) -> Result<Json<UserProfile>, BalanceError> {
    let derived = services::derived_for(&body)?;

    let inputs = ProfileInputs {
        weight_kg: body.weight_kg,
        height_cm: body.height_cm,
        age_years: body.age_years,
        sex: body.sex,
        activity_level: body.activity_level,
    };
    state
        .profiles
        .upsert_inputs(user_id, &inputs)
        .await
        .map_err(BalanceError::Persistence)?;

    let (bmr, tdee) = match derived {
        Some((bmr, tdee)) => (Some(bmr), Some(tdee)),
        None => (None, None),
    };
    state
        .profiles
        .save_derived(user_id, bmr, tdee)
        .await
        .map_err(BalanceError::Persistence)?;

    let recomputed = state.controller().recompute_for_profile_change(user_id).await?;
    debug!(%user_id, recomputed, "recomputed balances after profile change");

    let profile = state
        .profiles
        .get(user_id)
        .await
        .map_err(BalanceError::AggregationRead)?
        .ok_or(BalanceError::UnknownUser(user_id))?;
    Ok(Json(profile))
}
