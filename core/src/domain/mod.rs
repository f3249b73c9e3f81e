pub mod chain_suggestion;
pub mod common;
pub mod food_profile;
pub mod food_variation;
pub mod frequency;
pub mod health;
pub mod hyperfixation;
pub mod insight;
pub mod nutrition_settings;
pub mod rotation;
pub mod variety;
