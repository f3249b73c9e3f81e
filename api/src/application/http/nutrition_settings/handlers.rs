pub mod get_nutrition_settings;
pub mod update_nutrition_settings;
