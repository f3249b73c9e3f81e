use std::future::Future;

use tracing::warn;

use crate::domain::common::entities::app_errors::CoreError;

/// Runs an idempotent read, retrying once when the store reports itself
/// unavailable. Writes must never go through this helper.
pub async fn retry_idempotent<T, F, Fut>(operation: &str, mut read: F) -> Result<T, CoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CoreError>>,
{
    match read().await {
        Err(CoreError::StoreUnavailable(reason)) => {
            warn!("{operation} failed ({reason}), retrying once");
            read().await
        }
        other => other,
    }
}
