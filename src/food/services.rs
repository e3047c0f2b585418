use crate::error::BalanceError;
use crate::food::dto::FoodEntryRequest;
use crate::food::repo_types::FoodEntryInput;

/// Validates a submitted entry and converts it into ledger input.
pub fn validated_input(req: FoodEntryRequest) -> Result<FoodEntryInput, BalanceError> {
    if req.calories < 0 {
        return Err(BalanceError::InvalidInput(format!(
            "calories must be non-negative, got {}",
            req.calories
        )));
    }
    for (label, value) in [
        ("protein", req.protein_g),
        ("carbs", req.carbs_g),
        ("fat", req.fat_g),
    ] {
        if !(value >= 0.0) {
            return Err(BalanceError::InvalidInput(format!(
                "{label} must be non-negative, got {value}"
            )));
        }
    }
    if !(req.serving_multiplier > 0.0) {
        return Err(BalanceError::InvalidInput(format!(
            "serving multiplier must be positive, got {}",
            req.serving_multiplier
        )));
    }

    Ok(FoodEntryInput {
        name: req.name,
        calories: req.calories,
        protein_g: req.protein_g,
        carbs_g: req.carbs_g,
        fat_g: req.fat_g,
        serving_multiplier: req.serving_multiplier,
        consumed_at: req.consumed_at,
        entry_date: req.entry_date,
    })
}
