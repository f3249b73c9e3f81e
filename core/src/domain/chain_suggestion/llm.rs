use serde::Deserialize;
use tracing::{debug, error};

use crate::domain::{
    chain_suggestion::{
        entities::{SuggestionCandidate, SuggestionRequest},
        ports::{LLMClient, SuggestionBackend},
        schema::get_chain_suggestion_schema,
    },
    common::entities::app_errors::CoreError,
};

const PROMPT_TEMPLATE: &str = "You help people gently widen the range of foods they enjoy using food chaining. \
Suggest {count} foods that are similar to \"{food_name}\" in texture, flavor or temperature. {profile}\
For each food give a similarity score between 0 and 1 and one short, friendly sentence naming the \
texture, flavor or temperature it shares with the original. Describe foods neutrally and never tell \
the reader what to do.";

/// Suggestion backend that delegates to a generative text provider. Any
/// response that does not match the expected shape is reported as an
/// external service error; nothing untyped leaves this adapter.
#[derive(Debug, Clone)]
pub struct LlmSuggestionBackend<L>
where
    L: LLMClient,
{
    llm_client: L,
}

#[derive(Debug, Deserialize)]
struct LlmSuggestionResponse {
    suggestions: Vec<LlmSuggestion>,
}

#[derive(Debug, Deserialize)]
struct LlmSuggestion {
    food_name: String,
    similarity_score: f64,
    reasoning: String,
}

impl<L> LlmSuggestionBackend<L>
where
    L: LLMClient,
{
    pub fn new(llm_client: L) -> Self {
        Self { llm_client }
    }

    fn build_prompt(request: &SuggestionRequest) -> String {
        let profile = request
            .profile
            .as_ref()
            .map(|p| {
                let traits: Vec<String> = [
                    p.texture.as_ref().map(|t| format!("texture: {t}")),
                    p.flavor_profile.as_ref().map(|f| format!("flavor: {f}")),
                    p.temperature.as_ref().map(|t| format!("served: {t}")),
                ]
                .into_iter()
                .flatten()
                .collect();
                if traits.is_empty() {
                    String::new()
                } else {
                    format!("Known characteristics ({}). ", traits.join(", "))
                }
            })
            .unwrap_or_default();

        PROMPT_TEMPLATE
            .replace("{count}", &request.count.to_string())
            .replace("{food_name}", &request.food_name)
            .replace("{profile}", &profile)
    }
}

/// Parses a raw provider response into typed candidates.
pub fn parse_suggestion_response(raw: &str) -> Result<Vec<SuggestionCandidate>, CoreError> {
    let parsed: LlmSuggestionResponse = serde_json::from_str(raw).map_err(|e| {
        error!("Invalid suggestion response: {}", e);
        CoreError::ExternalServiceError(format!("Invalid suggestion response: {}", e))
    })?;

    parsed
        .suggestions
        .into_iter()
        .map(|s| {
            let food_name = s.food_name.trim().to_string();
            let reasoning = s.reasoning.trim().to_string();
            if food_name.is_empty() || reasoning.is_empty() {
                return Err(CoreError::ExternalServiceError(
                    "Suggestion without food_name or reasoning".to_string(),
                ));
            }
            if !(0.0..=1.0).contains(&s.similarity_score) {
                return Err(CoreError::ExternalServiceError(format!(
                    "Similarity score out of range: {}",
                    s.similarity_score
                )));
            }
            Ok(SuggestionCandidate::new(food_name, s.similarity_score, reasoning))
        })
        .collect()
}

impl<L> SuggestionBackend for LlmSuggestionBackend<L>
where
    L: LLMClient,
{
    async fn generate(
        &self,
        request: SuggestionRequest,
    ) -> Result<Vec<SuggestionCandidate>, CoreError> {
        let prompt = Self::build_prompt(&request);
        debug!(food_name = %request.food_name, "requesting chain suggestions from LLM");

        let raw = self
            .llm_client
            .generate_with_text(prompt, get_chain_suggestion_schema())
            .await?;

        parse_suggestion_response(&raw)
    }
}
