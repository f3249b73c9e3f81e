pub mod insight_repository;

pub use insight_repository::PostgresWeeklyInsightRepository;
