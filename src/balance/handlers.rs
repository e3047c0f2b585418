use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use time::Date;
use tracing::instrument;
use uuid::Uuid;

use crate::balance::dto::{BalanceResponse, RangeQuery};
use crate::error::BalanceError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:user_id/balance/:date",
            get(get_balance).post(recompute_balance),
        )
        .route("/users/:user_id/balance", get(get_balance_range))
}

#[instrument(skip(state))]
pub async fn get_balance(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(Uuid, Date)>,
) -> Result<Json<BalanceResponse>, BalanceError> {
    let balance = state
        .controller()
        .fetch(user_id, date)
        .await?
        .ok_or(BalanceError::NotFound("daily balance"))?;
    Ok(Json(balance.into()))
}

/// Forces a recomputation for one date, e.g. after a backfill.
#[instrument(skip(state))]
pub async fn recompute_balance(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(Uuid, Date)>,
) -> Result<Json<BalanceResponse>, BalanceError> {
    let balance = state.controller().upsert(user_id, date).await?;
    Ok(Json(balance.into()))
}

#[instrument(skip(state))]
pub async fn get_balance_range(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(range): Query<RangeQuery>,
) -> Result<Json<Vec<BalanceResponse>>, BalanceError> {
    if range.start > range.end {
        return Err(BalanceError::InvalidInput(
            "start must not be after end".into(),
        ));
    }
    let balances = state
        .controller()
        .fetch_range(user_id, range.start, range.end)
        .await?;
    Ok(Json(balances.into_iter().map(Into::into).collect()))
}
