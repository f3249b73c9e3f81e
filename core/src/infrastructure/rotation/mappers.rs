use sea_orm::ActiveValue::Set;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        rotation::entities::{RotationFood, RotationSchedule},
    },
    entity::rotation_schedules::{ActiveModel, Model},
};

impl TryFrom<Model> for RotationSchedule {
    type Error = CoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let foods: Vec<RotationFood> = serde_json::from_value(model.foods).map_err(|e| {
            error!("Failed to decode rotation foods for {}: {}", model.id, e);
            CoreError::StoreUnavailable(format!("corrupt rotation foods: {}", e))
        })?;

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            description: model.description,
            rotation_period_days: model.rotation_period_days,
            foods,
            is_active: model.is_active,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl TryFrom<&RotationSchedule> for ActiveModel {
    type Error = CoreError;

    fn try_from(schedule: &RotationSchedule) -> Result<Self, Self::Error> {
        let foods = serde_json::to_value(&schedule.foods)
            .map_err(|e| CoreError::validation(format!("invalid foods: {}", e)))?;

        Ok(Self {
            id: Set(schedule.id),
            user_id: Set(schedule.user_id),
            name: Set(schedule.name.clone()),
            description: Set(schedule.description.clone()),
            rotation_period_days: Set(schedule.rotation_period_days),
            foods: Set(foods),
            is_active: Set(schedule.is_active),
            created_at: Set(schedule.created_at.fixed_offset()),
            updated_at: Set(schedule.updated_at.fixed_offset()),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn model(foods: serde_json::Value) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Weeknights".to_string(),
            description: None,
            rotation_period_days: 7,
            foods,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_decodes_foods_with_optional_fields() {
        let schedule = RotationSchedule::try_from(model(json!([
            { "food_name": "Tacos", "portion_size": "2", "notes": null },
            { "food_name": "Soup", "portion_size": null, "notes": "extra crackers" }
        ])))
        .unwrap();

        assert_eq!(schedule.foods.len(), 2);
        assert_eq!(schedule.foods[1].notes.as_deref(), Some("extra crackers"));
    }

    #[test]
    fn test_corrupt_foods_are_reported() {
        let result = RotationSchedule::try_from(model(json!({ "food_name": "Tacos" })));
        assert!(matches!(result, Err(CoreError::StoreUnavailable(_))));
    }
}
