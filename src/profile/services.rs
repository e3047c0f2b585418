use crate::error::BalanceError;
use crate::metabolic;
use crate::profile::dto::ProfileUpdateRequest;

/// Validates the submitted inputs and derives (BMR, TDEE) when all five
/// are present. An incomplete profile yields `None`; out-of-domain values
/// fail even when the profile is incomplete.
pub fn derived_for(req: &ProfileUpdateRequest) -> Result<Option<(f64, f64)>, BalanceError> {
    if let Some(w) = req.weight_kg {
        if !(w > 0.0) {
            return Err(BalanceError::InvalidInput(format!(
                "weight must be positive, got {w}"
            )));
        }
    }
    if let Some(h) = req.height_cm {
        if !(h > 0.0) {
            return Err(BalanceError::InvalidInput(format!(
                "height must be positive, got {h}"
            )));
        }
    }
    if let Some(a) = req.age_years {
        if !(1..150).contains(&a) {
            return Err(BalanceError::InvalidInput(format!(
                "age must be between 1 and 149, got {a}"
            )));
        }
    }

    match (
        req.weight_kg,
        req.height_cm,
        req.age_years,
        req.sex,
        req.activity_level,
    ) {
        (Some(w), Some(h), Some(a), Some(s), Some(l)) => {
            metabolic::derive_metabolics(w, h, a, s, l).map(Some)
        }
        _ => Ok(None),
    }
}
