pub mod nutrition_settings_repository;

pub use nutrition_settings_repository::PostgresNutritionSettingsRepository;
