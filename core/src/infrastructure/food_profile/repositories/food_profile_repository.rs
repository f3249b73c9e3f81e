use sea_orm::{
    DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::{Expr, Func},
};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food_profile::{entities::FoodProfile, ports::FoodProfileRepository},
    },
    entity::food_profiles::{Column, Entity},
    infrastructure::store_error,
};

#[derive(Debug, Clone)]
pub struct PostgresFoodProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodProfileRepository for PostgresFoodProfileRepository {
    async fn get_by_name(&self, food_name: String) -> Result<Option<FoodProfile>, CoreError> {
        let row = Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::FoodName))).eq(food_name.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| store_error("get food profile", e))?;

        Ok(row.map(FoodProfile::from))
    }
}
