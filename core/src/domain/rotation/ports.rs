use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    rotation::{
        entities::RotationSchedule,
        value_objects::{
            CreateRotationScheduleInput, DeleteRotationScheduleInput, GetRotationSchedulesFilter,
            UpdateRotationScheduleInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RotationScheduleRepository: Send + Sync {
    fn create(
        &self,
        schedule: RotationSchedule,
    ) -> impl Future<Output = Result<RotationSchedule, CoreError>> + Send;

    fn get_by_id(
        &self,
        schedule_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<RotationSchedule>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetRotationSchedulesFilter,
    ) -> impl Future<Output = Result<Vec<RotationSchedule>, CoreError>> + Send;

    /// Returns `None` when no row with this id belongs to the schedule's user.
    fn update(
        &self,
        schedule: RotationSchedule,
    ) -> impl Future<Output = Result<Option<RotationSchedule>, CoreError>> + Send;

    /// Returns whether a row owned by `user_id` was removed.
    fn delete(
        &self,
        schedule_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RotationService: Send + Sync {
    fn create_rotation_schedule(
        &self,
        input: CreateRotationScheduleInput,
    ) -> impl Future<Output = Result<RotationSchedule, CoreError>> + Send;

    fn get_rotation_schedules(
        &self,
        user_id: Uuid,
        filter: GetRotationSchedulesFilter,
    ) -> impl Future<Output = Result<Vec<RotationSchedule>, CoreError>> + Send;

    fn get_rotation_schedule(
        &self,
        schedule_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<RotationSchedule, CoreError>> + Send;

    fn update_rotation_schedule(
        &self,
        input: UpdateRotationScheduleInput,
    ) -> impl Future<Output = Result<RotationSchedule, CoreError>> + Send;

    fn delete_rotation_schedule(
        &self,
        input: DeleteRotationScheduleInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
