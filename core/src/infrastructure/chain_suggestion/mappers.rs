use sea_orm::ActiveValue::Set;

use crate::{
    domain::chain_suggestion::entities::ChainSuggestion,
    entity::chain_suggestions::{ActiveModel, Model},
};

impl From<&Model> for ChainSuggestion {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            current_food_name: model.current_food_name.clone(),
            suggested_food_name: model.suggested_food_name.clone(),
            similarity_score: model.similarity_score,
            reasoning: model.reasoning.clone(),
            was_tried: model.was_tried,
            was_liked: model.was_liked,
            tried_at: model.tried_at.map(|t| t.to_utc()),
            feedback: model.feedback.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<Model> for ChainSuggestion {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}

impl From<&ChainSuggestion> for ActiveModel {
    fn from(suggestion: &ChainSuggestion) -> Self {
        Self {
            id: Set(suggestion.id),
            user_id: Set(suggestion.user_id),
            current_food_name: Set(suggestion.current_food_name.clone()),
            suggested_food_name: Set(suggestion.suggested_food_name.clone()),
            similarity_score: Set(suggestion.similarity_score),
            reasoning: Set(suggestion.reasoning.clone()),
            was_tried: Set(suggestion.was_tried),
            was_liked: Set(suggestion.was_liked),
            tried_at: Set(suggestion.tried_at.map(|t| t.fixed_offset())),
            feedback: Set(suggestion.feedback.clone()),
            created_at: Set(suggestion.created_at.fixed_offset()),
        }
    }
}
