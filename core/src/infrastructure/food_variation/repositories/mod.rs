pub mod food_variation_repository;

pub use food_variation_repository::PostgresFoodVariationRepository;
