use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::BalanceError;
use crate::food::dto::{DateQuery, FoodEntryRequest};
use crate::food::repo_types::FoodLogEntry;
use crate::food::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/food", get(list_food).post(create_food))
        .route(
            "/users/:user_id/food/:entry_id",
            put(update_food).delete(delete_food),
        )
}

#[instrument(skip(state))]
pub async fn list_food(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(q): Query<DateQuery>,
) -> Result<Json<Vec<FoodLogEntry>>, BalanceError> {
    let entries = state
        .food
        .list_for_date(user_id, q.date)
        .await
        .map_err(BalanceError::AggregationRead)?;
    Ok(Json(entries))
}

#[instrument(skip(state, body))]
pub async fn create_food(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<FoodEntryRequest>,
) -> Result<(StatusCode, Json<FoodLogEntry>), BalanceError> {
    let input = services::validated_input(body)?;
    let entry = state
        .food
        .insert(user_id, &input)
        .await
        .map_err(BalanceError::Persistence)?;

    state
        .controller()
        .recompute_for_food_change(user_id, entry.entry_date)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state, body))]
pub async fn update_food(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<FoodEntryRequest>,
) -> Result<Json<FoodLogEntry>, BalanceError> {
    let input = services::validated_input(body)?;
    let (old_date, entry) = state
        .food
        .update(user_id, entry_id, &input)
        .await
        .map_err(BalanceError::Persistence)?
        .ok_or(BalanceError::NotFound("food entry"))?;

    let controller = state.controller();
    controller
        .recompute_for_food_change(user_id, entry.entry_date)
        .await?;
    // An edit can move the entry to another day; that day changed too.
    if old_date != entry.entry_date {
        controller.recompute_for_food_change(user_id, old_date).await?;
    }

    Ok(Json(entry))
}

#[instrument(skip(state))]
pub async fn delete_food(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, BalanceError> {
    let date = state
        .food
        .delete(user_id, entry_id)
        .await
        .map_err(BalanceError::Persistence)?
        .ok_or(BalanceError::NotFound("food entry"))?;

    state
        .controller()
        .recompute_for_food_change(user_id, date)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
