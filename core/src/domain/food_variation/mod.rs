pub mod entities;
pub mod ports;
pub mod services;

pub use entities::FoodVariation;
pub use ports::{FoodVariationRepository, FoodVariationService};
