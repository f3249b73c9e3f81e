pub mod entities;
pub mod fallback;
pub mod llm;
pub mod ports;
pub mod rules;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
