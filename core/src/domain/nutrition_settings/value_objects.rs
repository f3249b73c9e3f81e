use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct UpdateNutritionSettingsInput {
    pub user_id: Uuid,
    pub track_calories: Option<bool>,
    pub track_macros: Option<bool>,
    pub track_micronutrients: Option<bool>,
    pub show_nutrition_in_recipes: Option<bool>,
}
