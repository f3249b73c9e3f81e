pub mod chain_suggestions;
pub mod food_consumption_events;
pub mod food_frequencies;
pub mod food_profiles;
pub mod food_variations;
pub mod hyperfixations;
pub mod nutrition_settings;
pub mod rotation_schedules;
pub mod weekly_insights;
