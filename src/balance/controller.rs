use std::collections::BTreeSet;
use std::sync::Arc;

use time::{Date, Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::balance::aggregator::Aggregator;
use crate::balance::repo::SummaryRepository;
use crate::balance::repo_types::DailyEnergyBalance;
use crate::error::BalanceError;

/// Persists aggregation results and owns every recomputation entry point.
/// This controller is the single recompute authority: the database holds
/// no triggers of its own.
///
/// Concurrent upserts of the same (user, date) race on last-write-wins;
/// each one still writes a complete, internally consistent snapshot.
pub struct SummaryController {
    aggregator: Aggregator,
    summaries: Arc<dyn SummaryRepository>,
    window_days: i64,
}

impl SummaryController {
    pub fn new(
        aggregator: Aggregator,
        summaries: Arc<dyn SummaryRepository>,
        window_days: i64,
    ) -> Self {
        Self {
            aggregator,
            summaries,
            window_days,
        }
    }

    /// Recomputes the balance for (user, date) and replaces the stored row
    /// wholesale. On write failure the prior stored value is untouched.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        date: Date,
    ) -> Result<DailyEnergyBalance, BalanceError> {
        let draft = self.aggregator.aggregate(user_id, date).await?;
        let balance = draft.into_balance(user_id, date);
        self.summaries
            .put(&balance)
            .await
            .map_err(BalanceError::Persistence)?;
        Ok(balance)
    }

    /// Entry point for the food-logging write path.
    pub async fn recompute_for_food_change(
        &self,
        user_id: Uuid,
        date: Date,
    ) -> Result<DailyEnergyBalance, BalanceError> {
        self.upsert(user_id, date).await
    }

    /// Entry point for the activity sync path. Dates are de-duplicated so
    /// N activities landing on one day cost one upsert, not N.
    pub async fn recompute_for_activity_change(
        &self,
        user_id: Uuid,
        dates: impl IntoIterator<Item = Date>,
    ) -> Result<Vec<DailyEnergyBalance>, BalanceError> {
        let unique: BTreeSet<Date> = dates.into_iter().collect();
        let mut balances = Vec::with_capacity(unique.len());
        for date in unique {
            balances.push(self.upsert(user_id, date).await?);
        }
        Ok(balances)
    }

    /// Entry point for baseline-affecting profile updates: recomputes the
    /// trailing window ending today. Returns the number of dates touched.
    pub async fn recompute_for_profile_change(
        &self,
        user_id: Uuid,
    ) -> Result<usize, BalanceError> {
        self.recompute_window(user_id, OffsetDateTime::now_utc().date())
            .await
    }

    /// Recomputes `[end − window_days, end]` inclusive.
    pub async fn recompute_window(
        &self,
        user_id: Uuid,
        end: Date,
    ) -> Result<usize, BalanceError> {
        let start = end - Duration::days(self.window_days);
        let mut date = start;
        let mut recomputed = 0usize;
        while date <= end {
            self.upsert(user_id, date).await?;
            recomputed += 1;
            date = match date.next_day() {
                Some(next) => next,
                None => break,
            };
        }
        debug!(%user_id, %start, %end, recomputed, "window recompute complete");
        Ok(recomputed)
    }

    /// Pure read of the stored value; never recomputes. `None` means the
    /// key was never aggregated, distinct from a present all-zero row.
    pub async fn fetch(
        &self,
        user_id: Uuid,
        date: Date,
    ) -> Result<Option<DailyEnergyBalance>, BalanceError> {
        self.summaries
            .get(user_id, date)
            .await
            .map_err(BalanceError::Persistence)
    }

    /// Stored rows in `[start, end]`, ascending; never-aggregated dates
    /// are omitted, not synthesized as zero rows.
    pub async fn fetch_range(
        &self,
        user_id: Uuid,
        start: Date,
        end: Date,
    ) -> Result<Vec<DailyEnergyBalance>, BalanceError> {
        self.summaries
            .get_range(user_id, start, end)
            .await
            .map_err(BalanceError::Persistence)
    }
}
