use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    frequency::{
        entities::{ConsumptionEvent, ConsumptionOutcome, FoodCount, FrequencySnapshot, FrequencyWindow},
        value_objects::RecordConsumptionInput,
    },
    hyperfixation::entities::HyperfixationRule,
};

/// Storage for the consumption log and the per-food snapshots derived from it.
#[cfg_attr(test, mockall::automock)]
pub trait FrequencyRepository: Send + Sync {
    /// Appends the event, recounts both windows for its `(user, food)` pair and
    /// applies `rule` to the refreshed snapshot, all as one atomic unit.
    /// Concurrent calls for the same pair must not lose events.
    fn record_consumption(
        &self,
        event: ConsumptionEvent,
        rule: HyperfixationRule,
    ) -> impl Future<Output = Result<ConsumptionOutcome, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FrequencySnapshot>, CoreError>> + Send;

    fn count_unique_foods(
        &self,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
    ) -> impl Future<Output = Result<i64, CoreError>> + Send;

    fn count_events(
        &self,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
    ) -> impl Future<Output = Result<i64, CoreError>> + Send;

    /// Most eaten foods in the window, highest count first.
    fn top_foods(
        &self,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<FoodCount>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FrequencyService: Send + Sync {
    fn record_consumption(
        &self,
        input: RecordConsumptionInput,
    ) -> impl Future<Output = Result<ConsumptionOutcome, CoreError>> + Send;

    fn get_frequencies(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FrequencySnapshot>, CoreError>> + Send;
}
