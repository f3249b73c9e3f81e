use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::nutrition_settings::value_objects::UpdateNutritionSettingsInput;

/// Per-user nutrition tracking preferences. Every flag is opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionSettings {
    pub user_id: Uuid,
    pub track_calories: bool,
    pub track_macros: bool,
    pub track_micronutrients: bool,
    pub show_nutrition_in_recipes: bool,
    pub updated_at: DateTime<Utc>,
}

impl NutritionSettings {
    /// All tracking disabled.
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            track_calories: false,
            track_macros: false,
            track_micronutrients: false,
            show_nutrition_in_recipes: false,
            updated_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, input: &UpdateNutritionSettingsInput) {
        if let Some(v) = input.track_calories {
            self.track_calories = v;
        }
        if let Some(v) = input.track_macros {
            self.track_macros = v;
        }
        if let Some(v) = input.track_micronutrients {
            self.track_micronutrients = v;
        }
        if let Some(v) = input.show_nutrition_in_recipes {
            self.show_nutrition_in_recipes = v;
        }
        self.updated_at = Utc::now();
    }
}
