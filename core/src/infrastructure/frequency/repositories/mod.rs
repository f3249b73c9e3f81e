pub mod frequency_repository;

pub use frequency_repository::PostgresFrequencyRepository;
