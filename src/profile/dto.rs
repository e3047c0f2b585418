use serde::Deserialize;

use crate::metabolic::{ActivityLevel, Sex};

/// Full replacement of the profile's physical inputs. Omitted fields are
/// cleared, which also clears the derived figures until the profile is
/// complete again.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateRequest {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<i32>,
    pub sex: Option<Sex>,
    pub activity_level: Option<ActivityLevel>,
}
