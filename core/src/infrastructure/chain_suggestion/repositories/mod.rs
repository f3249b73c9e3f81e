pub mod chain_suggestion_repository;

pub use chain_suggestion_repository::PostgresChainSuggestionRepository;
