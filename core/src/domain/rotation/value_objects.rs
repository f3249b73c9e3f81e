use uuid::Uuid;

use crate::domain::rotation::entities::RotationFood;

#[derive(Debug, Clone)]
pub struct CreateRotationScheduleInput {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub rotation_period_days: i32,
    pub foods: Vec<RotationFood>,
}

/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateRotationScheduleInput {
    pub schedule_id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub rotation_period_days: Option<i32>,
    pub foods: Option<Vec<RotationFood>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct DeleteRotationScheduleInput {
    pub schedule_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct GetRotationSchedulesFilter {
    pub active_only: bool,
}
