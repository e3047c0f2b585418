use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::activity::repo_types::{ActivityEntry, ActivityInput};

#[async_trait]
pub trait ActivityLedger: Send + Sync {
    async fn list_for_date(&self, user_id: Uuid, date: Date)
        -> anyhow::Result<Vec<ActivityEntry>>;

    /// Inserts a provider activity, or replaces the fields of the row
    /// already holding this `(user, external_id)` pair.
    async fn upsert_external(
        &self,
        user_id: Uuid,
        input: &ActivityInput,
    ) -> anyhow::Result<ActivityEntry>;

    /// Returns the owning entry date of the deleted row, `None` if absent.
    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Date>>;
}

pub struct PgActivityLedger {
    db: PgPool,
}

impl PgActivityLedger {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

const ACTIVITY_COLUMNS: &str = "id, user_id, external_id, category, calories_burned, \
                                duration_secs, distance_m, started_at, entry_date";

#[async_trait]
impl ActivityLedger for PgActivityLedger {
    async fn list_for_date(
        &self,
        user_id: Uuid,
        date: Date,
    ) -> anyhow::Result<Vec<ActivityEntry>> {
        let rows = sqlx::query_as::<_, ActivityEntry>(&format!(
            r#"
            SELECT {ACTIVITY_COLUMNS}
            FROM activity_entries
            WHERE user_id = $1 AND entry_date = $2
            ORDER BY started_at ASC
            "#,
        ))
        .bind(user_id)
        .bind(date)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn upsert_external(
        &self,
        user_id: Uuid,
        input: &ActivityInput,
    ) -> anyhow::Result<ActivityEntry> {
        let entry = sqlx::query_as::<_, ActivityEntry>(&format!(
            r#"
            INSERT INTO activity_entries
                (id, user_id, external_id, category, calories_burned,
                 duration_secs, distance_m, started_at, entry_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id, external_id) DO UPDATE SET
                category = EXCLUDED.category,
                calories_burned = EXCLUDED.calories_burned,
                duration_secs = EXCLUDED.duration_secs,
                distance_m = EXCLUDED.distance_m,
                started_at = EXCLUDED.started_at,
                entry_date = EXCLUDED.entry_date
            RETURNING {ACTIVITY_COLUMNS}
            "#,
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&input.external_id)
        .bind(&input.category)
        .bind(input.calories_burned)
        .bind(input.duration_secs)
        .bind(input.distance_m)
        .bind(input.started_at)
        .bind(input.entry_date)
        .fetch_one(&self.db)
        .await?;
        Ok(entry)
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Date>> {
        let date = sqlx::query_scalar::<_, Date>(
            r#"
            DELETE FROM activity_entries
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
