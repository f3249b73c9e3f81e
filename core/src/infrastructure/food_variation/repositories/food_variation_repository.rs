use sea_orm::{
    DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    sea_query::{Expr, Func},
};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food_variation::{entities::FoodVariation, ports::FoodVariationRepository},
    },
    entity::food_variations::{Column, Entity},
    infrastructure::store_error,
};

#[derive(Debug, Clone)]
pub struct PostgresFoodVariationRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodVariationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodVariationRepository for PostgresFoodVariationRepository {
    async fn get_by_food_name(&self, food_name: String) -> Result<Vec<FoodVariation>, CoreError> {
        let rows = Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(Column::BaseFoodName)))
                    .eq(food_name.to_lowercase()),
            )
            .order_by(Column::VariationType, Order::Asc)
            .order_by(Column::VariationName, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| store_error("get food variations", e))?;

        Ok(rows.into_iter().map(FoodVariation::from).collect())
    }
}
