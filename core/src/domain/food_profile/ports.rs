use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, food_profile::entities::FoodProfile};

#[cfg_attr(test, mockall::automock)]
pub trait FoodProfileRepository: Send + Sync {
    /// Case-insensitive lookup. `Ok(None)` is the common case.
    fn get_by_name(
        &self,
        food_name: String,
    ) -> impl Future<Output = Result<Option<FoodProfile>, CoreError>> + Send;
}
