pub mod rotation_repository;

pub use rotation_repository::PostgresRotationScheduleRepository;
