use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    insight::{entities::WeeklyInsight, value_objects::DismissInsightInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait WeeklyInsightRepository: Send + Sync {
    /// Inserts, or refreshes the message of the existing row with the same
    /// `(user_id, week_start_date, insight_type)`.
    fn upsert(
        &self,
        insight: WeeklyInsight,
    ) -> impl Future<Output = Result<WeeklyInsight, CoreError>> + Send;

    /// Non-dismissed insights of the week.
    fn get_by_week(
        &self,
        user_id: Uuid,
        week_start_date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<WeeklyInsight>, CoreError>> + Send;

    /// Returns whether a row owned by `user_id` matched.
    fn dismiss(
        &self,
        insight_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait InsightService: Send + Sync {
    fn generate_weekly_insights(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<WeeklyInsight>, CoreError>> + Send;

    fn get_weekly_insights(
        &self,
        user_id: Uuid,
        week_start_date: Option<NaiveDate>,
    ) -> impl Future<Output = Result<Vec<WeeklyInsight>, CoreError>> + Send;

    fn dismiss_insight(
        &self,
        input: DismissInsightInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
