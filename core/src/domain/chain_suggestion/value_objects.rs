use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

pub const MIN_SUGGESTION_COUNT: u32 = 1;
pub const MAX_SUGGESTION_COUNT: u32 = 10;

#[derive(Debug, Clone)]
pub struct GenerateSuggestionsInput {
    pub user_id: Uuid,
    pub food_name: String,
    pub count: u32,
}

impl GenerateSuggestionsInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(MIN_SUGGESTION_COUNT..=MAX_SUGGESTION_COUNT).contains(&self.count) {
            return Err(CoreError::validation(format!(
                "count must be between {MIN_SUGGESTION_COUNT} and {MAX_SUGGESTION_COUNT}"
            )));
        }
        if self.food_name.trim().is_empty() {
            return Err(CoreError::validation("food_name is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RecordFeedbackInput {
    pub suggestion_id: Uuid,
    pub user_id: Uuid,
    pub was_liked: bool,
    pub feedback: Option<String>,
}

/// The single mutation a suggestion receives.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionFeedback {
    pub was_liked: bool,
    pub feedback: Option<String>,
    pub tried_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct GetSuggestionHistoryFilter {
    pub food_name: Option<String>,
    pub limit: Option<u32>,
}
