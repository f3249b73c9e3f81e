use std::time::Duration;

use tracing::warn;

use crate::domain::{
    chain_suggestion::{
        entities::{SuggestionCandidate, SuggestionRequest},
        ports::SuggestionBackend,
    },
    common::entities::app_errors::CoreError,
};

/// Delegates to `primary` when one is configured and falls through to
/// `fallback` when it errors, exceeds `timeout`, or comes back empty.
#[derive(Debug, Clone)]
pub struct FallbackSuggestionBackend<P, F>
where
    P: SuggestionBackend,
    F: SuggestionBackend,
{
    primary: Option<P>,
    fallback: F,
    timeout: Duration,
}

impl<P, F> FallbackSuggestionBackend<P, F>
where
    P: SuggestionBackend,
    F: SuggestionBackend,
{
    pub fn new(primary: Option<P>, fallback: F, timeout: Duration) -> Self {
        Self {
            primary,
            fallback,
            timeout,
        }
    }
}

impl<P, F> SuggestionBackend for FallbackSuggestionBackend<P, F>
where
    P: SuggestionBackend,
    F: SuggestionBackend,
{
    async fn generate(
        &self,
        request: SuggestionRequest,
    ) -> Result<Vec<SuggestionCandidate>, CoreError> {
        if let Some(primary) = &self.primary {
            match tokio::time::timeout(self.timeout, primary.generate(request.clone())).await {
                Ok(Ok(candidates)) if !candidates.is_empty() => return Ok(candidates),
                Ok(Ok(_)) => warn!(food_name = %request.food_name, "primary suggestion backend returned nothing, falling back"),
                Ok(Err(e)) => warn!(food_name = %request.food_name, "primary suggestion backend failed, falling back: {}", e),
                Err(_) => warn!(
                    food_name = %request.food_name,
                    "primary suggestion backend timed out after {:?}, falling back",
                    self.timeout
                ),
            }
        }

        self.fallback.generate(request).await
    }
}
