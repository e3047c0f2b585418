use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Trailing window recomputed after a baseline-affecting profile change.
    pub recompute_window_days: i64,
    /// Baseline burn used when neither TDEE nor BMR has been derived.
    pub baseline_fallback_kcal: f64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            recompute_window_days: std::env::var("RECOMPUTE_WINDOW_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
            baseline_fallback_kcal: std::env::var("BASELINE_FALLBACK_KCAL")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(2000.0),
        })
    }
}
