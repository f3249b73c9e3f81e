use sea_orm::ActiveValue::Set;

use crate::{
    domain::nutrition_settings::entities::NutritionSettings,
    entity::nutrition_settings::{ActiveModel, Model},
};

impl From<Model> for NutritionSettings {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            track_calories: model.track_calories,
            track_macros: model.track_macros,
            track_micronutrients: model.track_micronutrients,
            show_nutrition_in_recipes: model.show_nutrition_in_recipes,
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<&NutritionSettings> for ActiveModel {
    fn from(settings: &NutritionSettings) -> Self {
        Self {
            user_id: Set(settings.user_id),
            track_calories: Set(settings.track_calories),
            track_macros: Set(settings.track_macros),
            track_micronutrients: Set(settings.track_micronutrients),
            show_nutrition_in_recipes: Set(settings.show_nutrition_in_recipes),
            created_at: Set(settings.updated_at.fixed_offset()),
            updated_at: Set(settings.updated_at.fixed_offset()),
        }
    }
}
