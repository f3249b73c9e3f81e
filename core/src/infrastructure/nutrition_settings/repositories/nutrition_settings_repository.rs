use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, sea_query::OnConflict,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        nutrition_settings::{entities::NutritionSettings, ports::NutritionSettingsRepository},
    },
    entity::nutrition_settings::{ActiveModel, Column, Entity},
    infrastructure::store_error,
};

#[derive(Debug, Clone)]
pub struct PostgresNutritionSettingsRepository {
    pub db: DatabaseConnection,
}

impl PostgresNutritionSettingsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl NutritionSettingsRepository for PostgresNutritionSettingsRepository {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<NutritionSettings>, CoreError> {
        let row = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| store_error("get nutrition settings", e))?;

        Ok(row.map(NutritionSettings::from))
    }

    async fn upsert(&self, settings: NutritionSettings) -> Result<NutritionSettings, CoreError> {
        let saved = Entity::insert(ActiveModel::from(&settings))
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::TrackCalories,
                        Column::TrackMacros,
                        Column::TrackMicronutrients,
                        Column::ShowNutritionInRecipes,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| store_error("upsert nutrition settings", e))?;

        Ok(NutritionSettings::from(saved))
    }
}
