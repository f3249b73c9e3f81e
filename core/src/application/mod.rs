use tracing::info;

use crate::{
    domain::{
        chain_suggestion::{
            fallback::FallbackSuggestionBackend, llm::LlmSuggestionBackend,
            rules::RuleBasedSuggestionBackend,
        },
        common::{MorselConfig, services::Service},
    },
    infrastructure::{
        chain_suggestion::repositories::PostgresChainSuggestionRepository,
        db::postgres::{Postgres, PostgresConfig},
        food_profile::repositories::PostgresFoodProfileRepository,
        food_variation::repositories::PostgresFoodVariationRepository,
        frequency::repositories::PostgresFrequencyRepository,
        health::repositories::PostgresHealthCheckRepository,
        hyperfixation::repositories::PostgresHyperfixationRepository,
        insight::repositories::PostgresWeeklyInsightRepository,
        llm::gemini_client::GeminiLLMClient,
        nutrition_settings::repositories::PostgresNutritionSettingsRepository,
        rotation::repositories::PostgresRotationScheduleRepository,
    },
};

pub type DefaultSuggestionBackend =
    FallbackSuggestionBackend<LlmSuggestionBackend<GeminiLLMClient>, RuleBasedSuggestionBackend>;

pub type MorselService = Service<
    PostgresFrequencyRepository,
    PostgresHyperfixationRepository,
    PostgresChainSuggestionRepository,
    PostgresFoodProfileRepository,
    PostgresFoodVariationRepository,
    PostgresRotationScheduleRepository,
    PostgresWeeklyInsightRepository,
    PostgresNutritionSettingsRepository,
    PostgresHealthCheckRepository,
    DefaultSuggestionBackend,
>;

/// Builds the suggestion backend. Without LLM credentials only the rule
/// table answers.
pub fn suggestion_backend(config: &MorselConfig) -> DefaultSuggestionBackend {
    let primary = config
        .llm
        .clone()
        .map(|llm| LlmSuggestionBackend::new(GeminiLLMClient::new(llm)));

    if primary.is_none() {
        info!("no LLM configured, chain suggestions use the rule table only");
    }

    FallbackSuggestionBackend::new(
        primary,
        RuleBasedSuggestionBackend::new(),
        config.suggestion.backend_timeout,
    )
}

pub async fn create_service(config: MorselConfig) -> Result<MorselService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresFrequencyRepository::new(db.clone()),
        PostgresHyperfixationRepository::new(db.clone()),
        PostgresChainSuggestionRepository::new(db.clone()),
        PostgresFoodProfileRepository::new(db.clone()),
        PostgresFoodVariationRepository::new(db.clone()),
        PostgresRotationScheduleRepository::new(db.clone()),
        PostgresWeeklyInsightRepository::new(db.clone()),
        PostgresNutritionSettingsRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        suggestion_backend(&config),
    ))
}
