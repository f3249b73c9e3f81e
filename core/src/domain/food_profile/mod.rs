pub mod entities;
pub mod ports;

pub use entities::FoodProfile;
pub use ports::FoodProfileRepository;
