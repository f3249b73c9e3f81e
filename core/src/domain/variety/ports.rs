use std::future::Future;

use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, variety::entities::VarietyReport};

#[cfg_attr(test, mockall::automock)]
pub trait VarietyService: Send + Sync {
    fn get_variety_report(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<VarietyReport, CoreError>> + Send;
}
