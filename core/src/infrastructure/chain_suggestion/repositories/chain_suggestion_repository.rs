use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    domain::{
        chain_suggestion::{
            entities::ChainSuggestion,
            ports::ChainSuggestionRepository,
            value_objects::{GetSuggestionHistoryFilter, SuggestionFeedback},
        },
        common::entities::app_errors::CoreError,
    },
    entity::chain_suggestions::{ActiveModel, Column, Entity},
    infrastructure::store_error,
};

#[derive(Debug, Clone)]
pub struct PostgresChainSuggestionRepository {
    pub db: DatabaseConnection,
}

impl PostgresChainSuggestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ChainSuggestionRepository for PostgresChainSuggestionRepository {
    async fn get_untried(
        &self,
        user_id: Uuid,
        current_food_name: String,
    ) -> Result<Vec<ChainSuggestion>, CoreError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CurrentFoodName.eq(current_food_name))
            .filter(Column::WasTried.eq(false))
            .order_by(Column::SimilarityScore, Order::Desc)
            .order_by(Column::CreatedAt, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| store_error("get untried suggestions", e))?;

        Ok(rows.into_iter().map(ChainSuggestion::from).collect())
    }

    async fn create_batch(
        &self,
        suggestions: Vec<ChainSuggestion>,
    ) -> Result<Vec<ChainSuggestion>, CoreError> {
        if suggestions.is_empty() {
            return Ok(suggestions);
        }

        Entity::insert_many(suggestions.iter().map(ActiveModel::from))
            .exec(&self.db)
            .await
            .map_err(|e| store_error("create chain suggestions", e))?;

        Ok(suggestions)
    }

    async fn get_by_id(
        &self,
        suggestion_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChainSuggestion>, CoreError> {
        let row = Entity::find()
            .filter(Column::Id.eq(suggestion_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| store_error("get chain suggestion", e))?;

        Ok(row.map(ChainSuggestion::from))
    }

    async fn record_feedback(
        &self,
        suggestion_id: Uuid,
        user_id: Uuid,
        feedback: SuggestionFeedback,
    ) -> Result<Option<ChainSuggestion>, CoreError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                was_tried: Set(true),
                was_liked: Set(Some(feedback.was_liked)),
                feedback: Set(feedback.feedback),
                tried_at: Set(Some(feedback.tried_at.fixed_offset())),
                ..Default::default()
            })
            .filter(Column::Id.eq(suggestion_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::WasTried.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| store_error("record suggestion feedback", e))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(suggestion_id, user_id).await
    }

    async fn get_history(
        &self,
        user_id: Uuid,
        filter: GetSuggestionHistoryFilter,
    ) -> Result<Vec<ChainSuggestion>, CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));
        if let Some(food_name) = filter.food_name {
            query = query.filter(Column::CurrentFoodName.eq(food_name));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(u64::from(limit));
        }

        let rows = query
            .order_by(Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
            .map_err(|e| store_error("get suggestion history", e))?;

        Ok(rows.into_iter().map(ChainSuggestion::from).collect())
    }
}
