use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    hyperfixation::{
        entities::Hyperfixation,
        value_objects::{EndHyperfixationInput, RecordHyperfixationInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait HyperfixationRepository: Send + Sync {
    fn get_active_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Hyperfixation>, CoreError>> + Send;

    /// Every record of the user, newest first.
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Hyperfixation>, CoreError>> + Send;

    fn get_by_id(
        &self,
        hyperfixation_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Hyperfixation>, CoreError>> + Send;

    /// Inserts `hyperfixation` unless an active row already exists for the
    /// pair, in which case that row is returned (with notes refreshed when
    /// `hyperfixation.notes` is set).
    fn create_or_get_active(
        &self,
        hyperfixation: Hyperfixation,
    ) -> impl Future<Output = Result<Hyperfixation, CoreError>> + Send;

    /// Persists an ended record. Returns `None` when the row is no longer
    /// active for this user.
    fn end(
        &self,
        hyperfixation: Hyperfixation,
    ) -> impl Future<Output = Result<Option<Hyperfixation>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HyperfixationService: Send + Sync {
    fn get_active_hyperfixations(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Hyperfixation>, CoreError>> + Send;

    fn get_hyperfixation_history(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Hyperfixation>, CoreError>> + Send;

    fn record_hyperfixation(
        &self,
        input: RecordHyperfixationInput,
    ) -> impl Future<Output = Result<Hyperfixation, CoreError>> + Send;

    fn end_hyperfixation(
        &self,
        input: EndHyperfixationInput,
    ) -> impl Future<Output = Result<Hyperfixation, CoreError>> + Send;
}
