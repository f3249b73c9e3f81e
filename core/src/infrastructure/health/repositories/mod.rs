pub mod health_check_repository;

pub use health_check_repository::PostgresHealthCheckRepository;
