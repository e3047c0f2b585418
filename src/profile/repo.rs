use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::profile::repo_types::{ProfileInputs, UserProfile};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, user_id: Uuid) -> anyhow::Result<Option<UserProfile>>;

    /// Replaces the physical inputs as a whole, creating the row if absent.
    /// Derived figures are untouched; callers re-derive them separately.
    async fn upsert_inputs(&self, user_id: Uuid, inputs: &ProfileInputs) -> anyhow::Result<()>;

    async fn save_derived(
        &self,
        user_id: Uuid,
        bmr: Option<f64>,
        tdee: Option<f64>,
    ) -> anyhow::Result<()>;
}

pub struct PgProfileStore {
    db: PgPool,
}

impl PgProfileStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    user_id: Uuid,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age_years: Option<i32>,
    sex: Option<String>,
    activity_level: Option<String>,
    bmr: Option<f64>,
    tdee: Option<f64>,
}

impl TryFrom<ProfileRow> for UserProfile {
    type Error = anyhow::Error;

    fn try_from(r: ProfileRow) -> Result<Self, Self::Error> {
        Ok(UserProfile {
            user_id: r.user_id,
            weight_kg: r.weight_kg,
            height_cm: r.height_cm,
            age_years: r.age_years,
            sex: r.sex.as_deref().map(str::parse).transpose()?,
            activity_level: r.activity_level.as_deref().map(str::parse).transpose()?,
            bmr: r.bmr,
            tdee: r.tdee,
        })
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get(&self, user_id: Uuid) -> anyhow::Result<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT user_id, weight_kg, height_cm, age_years, sex, activity_level, bmr, tdee
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        row.map(UserProfile::try_from).transpose()
    }

    async fn upsert_inputs(&self, user_id: Uuid, inputs: &ProfileInputs) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, weight_kg, height_cm, age_years, sex, activity_level)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                weight_kg = EXCLUDED.weight_kg,
                height_cm = EXCLUDED.height_cm,
                age_years = EXCLUDED.age_years,
                sex = EXCLUDED.sex,
                activity_level = EXCLUDED.activity_level,
                updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(inputs.weight_kg)
        .bind(inputs.height_cm)
        .bind(inputs.age_years)
        .bind(inputs.sex.map(|s| s.as_str()))
        .bind(inputs.activity_level.map(|l| l.as_str()))
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn save_derived(
        &self,
        user_id: Uuid,
        bmr: Option<f64>,
        tdee: Option<f64>,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE profiles
            SET bmr = $2, tdee = $3, updated_at = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(bmr)
        .bind(tdee)
        .execute(&self.db)
        .await?;
        Ok(())
    }
}
