use serde::Serialize;
use uuid::Uuid;

use crate::metabolic::{ActivityLevel, Sex};

/// One account's physical inputs plus the derived metabolic figures.
///
/// `bmr`/`tdee` are present iff all five physical inputs are present;
/// they are never written directly by callers, only re-derived after an
/// input change.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<i32>,
    pub sex: Option<Sex>,
    pub activity_level: Option<ActivityLevel>,
    pub bmr: Option<f64>,
    pub tdee: Option<f64>,
}

impl UserProfile {
    /// Baseline daily burn: TDEE if derived, else BMR, else none.
    pub fn baseline_kcal(&self) -> Option<f64> {
        self.tdee.or(self.bmr)
    }
}

/// The user-editable slice of a profile, written as a whole.
#[derive(Debug, Clone)]
pub struct ProfileInputs {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<i32>,
    pub sex: Option<Sex>,
    pub activity_level: Option<ActivityLevel>,
}
