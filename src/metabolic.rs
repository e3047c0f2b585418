//! Basal metabolic rate and daily energy expenditure estimation.
//!
//! BMR uses the Mifflin-St Jeor equation; TDEE scales BMR by a fixed
//! activity-level multiplier. Both are pure functions with no I/O.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BalanceError;

/// Mifflin-St Jeor sex offsets (kcal/day).
const MALE_OFFSET: f64 = 5.0;
const FEMALE_OFFSET: f64 = -161.0;
/// Midpoint of the two published offsets, applied when sex is unspecified.
const OTHER_OFFSET: f64 = -78.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }

    fn bmr_offset(&self) -> f64 {
        match self {
            Sex::Male => MALE_OFFSET,
            Sex::Female => FEMALE_OFFSET,
            Sex::Other => OTHER_OFFSET,
        }
    }
}

impl FromStr for Sex {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            "other" => Ok(Sex::Other),
            other => Err(BalanceError::InvalidInput(format!(
                "unrecognized sex category: {other}"
            ))),
        }
    }
}

/// Activity tiers and their TDEE multipliers. The set is closed: an
/// unrecognized tier fails at the parse boundary instead of silently
/// defaulting to sedentary, which would understate the energy budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            other => Err(BalanceError::InvalidInput(format!(
                "unrecognized activity level: {other}"
            ))),
        }
    }
}

/// Calculates BMR via Mifflin-St Jeor:
/// `10 × weight + 6.25 × height − 5 × age + sex offset`.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms, must be positive
/// * `height_cm` - Height in centimeters, must be positive
/// * `age_years` - Age in whole years, 1–149
pub fn compute_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
) -> Result<f64, BalanceError> {
    if !(weight_kg > 0.0) {
        return Err(BalanceError::InvalidInput(format!(
            "weight must be positive, got {weight_kg}"
        )));
    }
    if !(height_cm > 0.0) {
        return Err(BalanceError::InvalidInput(format!(
            "height must be positive, got {height_cm}"
        )));
    }
    if !(1..150).contains(&age_years) {
        return Err(BalanceError::InvalidInput(format!(
            "age must be between 1 and 149, got {age_years}"
        )));
    }

    Ok(10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + sex.bmr_offset())
}

/// Scales BMR by the activity-level multiplier.
pub fn compute_tdee(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * level.multiplier()
}

/// Computes both derived figures from a complete set of physical inputs.
pub fn derive_metabolics(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
    level: ActivityLevel,
) -> Result<(f64, f64), BalanceError> {
    let bmr = compute_bmr(weight_kg, height_cm, age_years, sex)?;
    Ok((bmr, compute_tdee(bmr, level)))
}
