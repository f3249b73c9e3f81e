use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition_settings::{
        entities::NutritionSettings, value_objects::UpdateNutritionSettingsInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait NutritionSettingsRepository: Send + Sync {
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<NutritionSettings>, CoreError>> + Send;

    fn upsert(
        &self,
        settings: NutritionSettings,
    ) -> impl Future<Output = Result<NutritionSettings, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait NutritionSettingsService: Send + Sync {
    /// Stored settings, or the disabled defaults when the user has none.
    fn get_nutrition_settings(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<NutritionSettings, CoreError>> + Send;

    fn update_nutrition_settings(
        &self,
        input: UpdateNutritionSettingsInput,
    ) -> impl Future<Output = Result<NutritionSettings, CoreError>> + Send;
}
