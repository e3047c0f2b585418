use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::activity::dto::{DateQuery, SyncActivitiesRequest, SyncActivitiesResponse};
use crate::activity::repo_types::ActivityEntry;
use crate::activity::services;
use crate::error::BalanceError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/activities", get(list_activities))
        .route("/users/:user_id/activities/sync", post(sync_activities))
        .route("/users/:user_id/activities/:entry_id", delete(delete_activity))
}

#[instrument(skip(state))]
pub async fn list_activities(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(q): Query<DateQuery>,
) -> Result<Json<Vec<ActivityEntry>>, BalanceError> {
    let entries = state
        .activity
        .list_for_date(user_id, q.date)
        .await
        .map_err(BalanceError::AggregationRead)?;
    Ok(Json(entries))
}

#[instrument(skip(state, body))]
pub async fn sync_activities(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<SyncActivitiesRequest>,
) -> Result<Json<SyncActivitiesResponse>, BalanceError> {
    let outcome = services::ingest_batch(&state, user_id, body.activities).await?;
    Ok(Json(SyncActivitiesResponse {
        imported: outcome.imported,
        recomputed_dates: outcome.recomputed_dates,
    }))
}

#[instrument(skip(state))]
pub async fn delete_activity(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, BalanceError> {
    let date = state
        .activity
        .delete(user_id, entry_id)
        .await
        .map_err(BalanceError::Persistence)?
        .ok_or(BalanceError::NotFound("activity entry"))?;

    state
        .controller()
        .recompute_for_activity_change(user_id, [date])
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
