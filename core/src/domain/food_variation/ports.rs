use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, food_variation::entities::FoodVariation,
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodVariationRepository: Send + Sync {
    fn get_by_food_name(
        &self,
        food_name: String,
    ) -> impl Future<Output = Result<Vec<FoodVariation>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodVariationService: Send + Sync {
    fn get_variation_ideas(
        &self,
        food_name: String,
    ) -> impl Future<Output = Result<Vec<FoodVariation>, CoreError>> + Send;
}
