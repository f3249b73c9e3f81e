pub mod hyperfixation_repository;

pub use hyperfixation_repository::PostgresHyperfixationRepository;
