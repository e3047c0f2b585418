use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::balance::repo_types::DailyEnergyBalance;

#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// Whole-row insert-or-replace for the balance's (user, date) key.
    async fn put(&self, balance: &DailyEnergyBalance) -> anyhow::Result<()>;

    async fn get(&self, user_id: Uuid, date: Date)
        -> anyhow::Result<Option<DailyEnergyBalance>>;

    /// Stored rows in `[start, end]`, ascending by date. Dates never
    /// aggregated are simply missing from the result.
    async fn get_range(
        &self,
        user_id: Uuid,
        start: Date,
        end: Date,
    ) -> anyhow::Result<Vec<DailyEnergyBalance>>;
}

pub struct PgSummaryRepository {
    db: PgPool,
}

impl PgSummaryRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

const BALANCE_COLUMNS: &str = "user_id, entry_date, calories_consumed, protein_g, carbs_g, \
                               fat_g, baseline_burn, exercise_burn";

#[async_trait]
impl SummaryRepository for PgSummaryRepository {
    async fn put(&self, balance: &DailyEnergyBalance) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO daily_balances
                (user_id, entry_date, calories_consumed, protein_g, carbs_g, fat_g,
                 baseline_burn, exercise_burn)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, entry_date) DO UPDATE SET
                calories_consumed = EXCLUDED.calories_consumed,
                protein_g = EXCLUDED.protein_g,
                carbs_g = EXCLUDED.carbs_g,
                fat_g = EXCLUDED.fat_g,
                baseline_burn = EXCLUDED.baseline_burn,
                exercise_burn = EXCLUDED.exercise_burn,
                computed_at = now()
            "#,
        )
        .bind(balance.user_id)
        .bind(balance.entry_date)
        .bind(balance.calories_consumed)
        .bind(balance.protein_g)
        .bind(balance.carbs_g)
        .bind(balance.fat_g)
        .bind(balance.baseline_burn)
        .bind(balance.exercise_burn)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn get(
        &self,
        user_id: Uuid,
        date: Date,
    ) -> anyhow::Result<Option<DailyEnergyBalance>> {
        let row = sqlx::query_as::<_, DailyEnergyBalance>(&format!(
            r#"
            SELECT {BALANCE_COLUMNS}
            FROM daily_balances
            WHERE user_id = $1 AND entry_date = $2
            "#,
        ))
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn get_range(
        &self,
        user_id: Uuid,
        start: Date,
        end: Date,
    ) -> anyhow::Result<Vec<DailyEnergyBalance>> {
        let rows = sqlx::query_as::<_, DailyEnergyBalance>(&format!(
            r#"
            SELECT {BALANCE_COLUMNS}
            FROM daily_balances
            WHERE user_id = $1 AND entry_date BETWEEN $2 AND $3
            ORDER BY entry_date ASC
            "#,
        ))
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
