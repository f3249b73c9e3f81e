pub mod entities;
pub mod ports;
pub mod scoring;
pub mod services;

pub use entities::*;
pub use ports::*;
