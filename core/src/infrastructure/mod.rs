use sea_orm::DbErr;
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub mod chain_suggestion;
pub mod db;
pub mod food_profile;
pub mod food_variation;
pub mod frequency;
pub mod health;
pub mod hyperfixation;
pub mod insight;
pub mod llm;
pub mod nutrition_settings;
pub mod rotation;

/// Logs a datastore failure and surfaces it as [`CoreError::StoreUnavailable`].
pub(crate) fn store_error(action: &str, e: DbErr) -> CoreError {
    error!("Failed to {}: {}", action, e);
    CoreError::store(action, e)
}
