use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, normalize_food_name},
    rotation::value_objects::{CreateRotationScheduleInput, UpdateRotationScheduleInput},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RotationFood {
    pub food_name: String,
    pub portion_size: Option<String>,
    pub notes: Option<String>,
}

/// A user-authored, named, cyclical list of foods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RotationSchedule {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub rotation_period_days: i32,
    pub foods: Vec<RotationFood>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RotationSchedule {
    pub fn new(input: CreateRotationScheduleInput) -> Result<Self, CoreError> {
        let (now, timestamp) = generate_timestamp();

        let schedule = Self {
            id: Uuid::new_v7(timestamp),
            user_id: input.user_id,
            name: input.name.trim().to_string(),
            description: input.description,
            rotation_period_days: input.rotation_period_days,
            foods: normalize_foods(input.foods),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        schedule.validate()?;

        Ok(schedule)
    }

    /// Applies the provided fields. The schedule is left untouched when the
    /// merged result does not validate.
    pub fn apply(&mut self, input: UpdateRotationScheduleInput) -> Result<(), CoreError> {
        let mut merged = self.clone();
        if let Some(name) = input.name {
            merged.name = name.trim().to_string();
        }
        if let Some(description) = input.description {
            merged.description = Some(description);
        }
        if let Some(period) = input.rotation_period_days {
            merged.rotation_period_days = period;
        }
        if let Some(foods) = input.foods {
            merged.foods = normalize_foods(foods);
        }
        if let Some(is_active) = input.is_active {
            merged.is_active = is_active;
        }
        merged.validate()?;

        merged.updated_at = Utc::now();
        *self = merged;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::validation("name is required"));
        }
        if self.rotation_period_days < 1 {
            return Err(CoreError::validation("rotation_period_days must be at least 1"));
        }
        if self.foods.is_empty() {
            return Err(CoreError::validation("foods must not be empty"));
        }
        if self.foods.iter().any(|f| f.food_name.is_empty()) {
            return Err(CoreError::validation("every food requires a food_name"));
        }
        Ok(())
    }
}

fn normalize_foods(foods: Vec<RotationFood>) -> Vec<RotationFood> {
    foods
        .into_iter()
        .map(|f| RotationFood {
            food_name: normalize_food_name(&f.food_name),
            ..f
        })
        .collect()
}
