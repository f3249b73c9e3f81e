use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food_profile::entities::FoodProfile};

/// A persisted food-chaining suggestion. Created in batches, then mutated
/// exactly once when the user reports back on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChainSuggestion {
    pub id: Uuid,
    pub user_id: Uuid,
    pub current_food_name: String,
    pub suggested_food_name: String,
    pub similarity_score: f64,
    pub reasoning: String,
    pub was_tried: bool,
    pub was_liked: Option<bool>,
    pub tried_at: Option<DateTime<Utc>>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ChainSuggestion {
    pub fn new(user_id: Uuid, current_food_name: String, candidate: SuggestionCandidate) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            current_food_name,
            suggested_food_name: candidate.food_name,
            similarity_score: candidate.similarity_score,
            reasoning: candidate.reasoning,
            was_tried: false,
            was_liked: None,
            tried_at: None,
            feedback: None,
            created_at: now,
        }
    }
}

/// Backend output before it is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestionCandidate {
    pub food_name: String,
    pub similarity_score: f64,
    pub reasoning: String,
}

impl SuggestionCandidate {
    pub fn new(food_name: impl Into<String>, similarity_score: f64, reasoning: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            similarity_score,
            reasoning: reasoning.into(),
        }
    }
}

/// Input handed to a [`SuggestionBackend`](super::ports::SuggestionBackend).
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub food_name: String,
    pub profile: Option<FoodProfile>,
    pub count: usize,
}
