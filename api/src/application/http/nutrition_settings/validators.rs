use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Omitted flags keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNutritionSettingsValidator {
    #[serde(default)]
    pub track_calories: Option<bool>,

    #[serde(default)]
    pub track_macros: Option<bool>,

    #[serde(default)]
    pub track_micronutrients: Option<bool>,

    #[serde(default)]
    pub show_nutrition_in_recipes: Option<bool>,
}
