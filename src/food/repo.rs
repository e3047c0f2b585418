use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::food::repo_types::{FoodEntryInput, FoodLogEntry};

#[async_trait]
pub trait FoodLedger: Send + Sync {
    async fn list_for_date(&self, user_id: Uuid, date: Date) -> anyhow::Result<Vec<FoodLogEntry>>;

    async fn insert(&self, user_id: Uuid, input: &FoodEntryInput) -> anyhow::Result<FoodLogEntry>;

    /// Full-field update. Returns the previous entry date alongside the
    /// updated row so the caller can recompute both affected days when an
    /// entry moves across dates. `None` if the entry does not exist.
    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        input: &FoodEntryInput,
    ) -> anyhow::Result<Option<(Date, FoodLogEntry)>>;

    /// Returns the owning entry date of the deleted row, `None` if absent.
    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Date>>;
}

pub struct PgFoodLedger {
    db: PgPool,
}

impl PgFoodLedger {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

const FOOD_COLUMNS: &str = "id, user_id, name, calories, protein_g, carbs_g, fat_g, \
                            serving_multiplier, consumed_at, entry_date";

#[async_trait]
impl FoodLedger for PgFoodLedger {
    async fn list_for_date(&self, user_id: Uuid, date: Date) -> anyhow::Result<Vec<FoodLogEntry>> {
        let rows = sqlx::query_as::<_, FoodLogEntry>(&format!(
            r#"
            SELECT {FOOD_COLUMNS}
            FROM food_entries
            WHERE user_id = $1 AND entry_date = $2
            ORDER BY consumed_at ASC
            "#,
        ))
        .bind(user_id)
        .bind(date)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, user_id: Uuid, input: &FoodEntryInput) -> anyhow::Result<FoodLogEntry> {
        let entry = sqlx::query_as::<_, FoodLogEntry>(&format!(
            r#"
            INSERT INTO food_entries
                (id, user_id, name, calories, protein_g, carbs_g, fat_g,
                 serving_multiplier, consumed_at, entry_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {FOOD_COLUMNS}
            "#,
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&input.name)
        .bind(input.calories)
        .bind(input.protein_g)
        .bind(input.carbs_g)
        .bind(input.fat_g)
        .bind(input.serving_multiplier)
        .bind(input.consumed_at)
        .bind(input.entry_date)
        .fetch_one(&self.db)
        .await?;
        Ok(entry)
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        input: &FoodEntryInput,
    ) -> anyhow::Result<Option<(Date, FoodLogEntry)>> {
        let old_date = sqlx::query_scalar::<_, Date>(
            r#"
            SELECT entry_date FROM food_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        let Some(old_date) = old_date else {
            return Ok(None);
        };

        let updated = sqlx::query_as::<_, FoodLogEntry>(&format!(
            r#"
            UPDATE food_entries
            SET name = $3, calories = $4, protein_g = $5, carbs_g = $6, fat_g = $7,
                serving_multiplier = $8, consumed_at = $9, entry_date = $10
            WHERE id = $1 AND user_id = $2
            RETURNING {FOOD_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(user_id)
        .bind(&input.name)
        .bind(input.calories)
        .bind(input.protein_g)
        .bind(input.carbs_g)
        .bind(input.fat_g)
        .bind(input.serving_multiplier)
        .bind(input.consumed_at)
        .bind(input.entry_date)
        .fetch_optional(&self.db)
        .await?;
        Ok(updated.map(|entry| (old_date, entry)))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Date>> {
        let date = sqlx::query_scalar::<_, Date>(
            r#"
            DELETE FROM food_entries
            WHERE id = $1 AND user_id = $2
            RETURNING entry_date
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(date)
    }
}
