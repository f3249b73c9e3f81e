pub mod food_profile_repository;

pub use food_profile_repository::PostgresFoodProfileRepository;
