pub mod chain_suggestion;
pub mod consumption;
pub mod food_variation;
pub mod health;
pub mod hyperfixation;
pub mod insight;
pub mod nutrition_settings;
pub mod rotation;
pub mod server;
pub mod variety;
