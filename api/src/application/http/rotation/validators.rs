use morsel_core::domain::rotation::entities::RotationFood;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RotationFoodValidator {
    #[validate(length(min = 1, max = 255, message = "food_name is required"))]
    pub food_name: String,

    #[serde(default)]
    pub portion_size: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl From<RotationFoodValidator> for RotationFood {
    fn from(food: RotationFoodValidator) -> Self {
        Self {
            food_name: food.food_name,
            portion_size: food.portion_size,
            notes: food.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRotationScheduleValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "rotation_period_days must be positive"))]
    pub rotation_period_days: i32,

    #[validate(nested)]
    pub foods: Vec<RotationFoodValidator>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRotationScheduleValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "rotation_period_days must be positive"))]
    pub rotation_period_days: Option<i32>,

    #[serde(default)]
    #[validate(nested)]
    pub foods: Option<Vec<RotationFoodValidator>>,

    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RotationScheduleQuery {
    #[serde(default)]
    pub active_only: bool,
}
