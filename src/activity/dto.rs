use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// One activity as delivered by the external provider's sync layer. The
/// OAuth/transport dance happens upstream; this is the already-fetched
/// payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderActivity {
    pub external_id: String,
    pub category: String,
    /// Absent when the provider did not estimate energy itself.
    pub calories_burned: Option<i32>,
    pub duration_secs: i32,
    pub distance_m: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    pub entry_date: Date,
}

#[derive(Debug, Deserialize)]
pub struct SyncActivitiesRequest {
    pub activities: Vec<ProviderActivity>,
}

#[derive(Debug, Serialize)]
pub struct SyncActivitiesResponse {
    pub imported: usize,
    pub recomputed_dates: usize,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Date,
}
