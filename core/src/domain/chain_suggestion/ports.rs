use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    chain_suggestion::{
        entities::{ChainSuggestion, SuggestionCandidate, SuggestionRequest},
        value_objects::{
            GenerateSuggestionsInput, GetSuggestionHistoryFilter, RecordFeedbackInput,
            SuggestionFeedback,
        },
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait ChainSuggestionRepository: Send + Sync {
    /// Untried suggestions for the pair, highest score first.
    fn get_untried(
        &self,
        user_id: Uuid,
        current_food_name: String,
    ) -> impl Future<Output = Result<Vec<ChainSuggestion>, CoreError>> + Send;

    fn create_batch(
        &self,
        suggestions: Vec<ChainSuggestion>,
    ) -> impl Future<Output = Result<Vec<ChainSuggestion>, CoreError>> + Send;

    fn get_by_id(
        &self,
        suggestion_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ChainSuggestion>, CoreError>> + Send;

    /// Applies feedback to an untried suggestion owned by `user_id`. Returns
    /// `None` when no such untried row exists.
    fn record_feedback(
        &self,
        suggestion_id: Uuid,
        user_id: Uuid,
        feedback: SuggestionFeedback,
    ) -> impl Future<Output = Result<Option<ChainSuggestion>, CoreError>> + Send;

    fn get_history(
        &self,
        user_id: Uuid,
        filter: GetSuggestionHistoryFilter,
    ) -> impl Future<Output = Result<Vec<ChainSuggestion>, CoreError>> + Send;
}

/// A source of substitute-food candidates.
#[cfg_attr(test, mockall::automock)]
pub trait SuggestionBackend: Send + Sync {
    fn generate(
        &self,
        request: SuggestionRequest,
    ) -> impl Future<Output = Result<Vec<SuggestionCandidate>, CoreError>> + Send;
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChainSuggestionService: Send + Sync {
    fn generate_suggestions(
        &self,
        input: GenerateSuggestionsInput,
    ) -> impl Future<Output = Result<Vec<ChainSuggestion>, CoreError>> + Send;

    fn record_feedback(
        &self,
        input: RecordFeedbackInput,
    ) -> impl Future<Output = Result<ChainSuggestion, CoreError>> + Send;

    fn get_suggestion_history(
        &self,
        user_id: Uuid,
        filter: GetSuggestionHistoryFilter,
    ) -> impl Future<Output = Result<Vec<ChainSuggestion>, CoreError>> + Send;
}
