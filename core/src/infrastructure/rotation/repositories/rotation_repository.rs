use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait, Order,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        rotation::{
            entities::RotationSchedule, ports::RotationScheduleRepository,
            value_objects::GetRotationSchedulesFilter,
        },
    },
    entity::rotation_schedules::{ActiveModel, Column, Entity},
    infrastructure::store_error,
};

#[derive(Debug, Clone)]
pub struct PostgresRotationScheduleRepository {
    pub db: DatabaseConnection,
}

impl PostgresRotationScheduleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RotationScheduleRepository for PostgresRotationScheduleRepository {
    async fn create(&self, schedule: RotationSchedule) -> Result<RotationSchedule, CoreError> {
        let created = Entity::insert(ActiveModel::try_from(&schedule)?)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| store_error("create rotation schedule", e))?;

        RotationSchedule::try_from(created)
    }

    async fn get_by_id(
        &self,
        schedule_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<RotationSchedule>, CoreError> {
        let row = Entity::find()
            .filter(Column::Id.eq(schedule_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| store_error("get rotation schedule", e))?;

        row.map(RotationSchedule::try_from).transpose()
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetRotationSchedulesFilter,
    ) -> Result<Vec<RotationSchedule>, CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));
        if filter.active_only {
            query = query.filter(Column::IsActive.eq(true));
        }

        let rows = query
            .order_by(Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
            .map_err(|e| store_error("get rotation schedules", e))?;

        rows.into_iter().map(RotationSchedule::try_from).collect()
    }

    async fn update(&self, schedule: RotationSchedule) -> Result<Option<RotationSchedule>, CoreError> {
        if self.get_by_id(schedule.id, schedule.user_id).await?.is_none() {
            return Ok(None);
        }

        let mut active_model = ActiveModel::try_from(&schedule)?;
        active_model.id = Unchanged(schedule.id);
        active_model.user_id = Unchanged(schedule.user_id);
        active_model.created_at = Unchanged(schedule.created_at.fixed_offset());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| store_error("update rotation schedule", e))?;

        RotationSchedule::try_from(updated).map(Some)
    }

    async fn delete(&self, schedule_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(schedule_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| store_error("delete rotation schedule", e))?;

        Ok(result.rows_affected > 0)
    }
}
