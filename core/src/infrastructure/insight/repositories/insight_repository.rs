use chrono::NaiveDate;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, sea_query::OnConflict,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        insight::{entities::WeeklyInsight, ports::WeeklyInsightRepository},
    },
    entity::weekly_insights::{ActiveModel, Column, Entity},
    infrastructure::store_error,
};

#[derive(Debug, Clone)]
pub struct PostgresWeeklyInsightRepository {
    pub db: DatabaseConnection,
}

impl PostgresWeeklyInsightRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl WeeklyInsightRepository for PostgresWeeklyInsightRepository {
    async fn upsert(&self, insight: WeeklyInsight) -> Result<WeeklyInsight, CoreError> {
        let saved = Entity::insert(ActiveModel::from(&insight))
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::WeekStartDate, Column::InsightType])
                    .update_columns([Column::Message, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| store_error("upsert weekly insight", e))?;

        WeeklyInsight::try_from(saved)
    }

    async fn get_by_week(
        &self,
        user_id: Uuid,
        week_start_date: NaiveDate,
    ) -> Result<Vec<WeeklyInsight>, CoreError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::WeekStartDate.eq(week_start_date))
            .filter(Column::IsDismissed.eq(false))
            .order_by(Column::CreatedAt, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| store_error("get weekly insights", e))?;

        rows.into_iter().map(WeeklyInsight::try_from).collect()
    }

    async fn dismiss(&self, insight_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                is_dismissed: Set(true),
                ..Default::default()
            })
            .filter(Column::Id.eq(insight_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| store_error("dismiss weekly insight", e))?;

        Ok(result.rows_affected > 0)
    }
}
