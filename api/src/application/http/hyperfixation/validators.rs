use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordHyperfixationValidator {
    #[validate(length(min = 1, max = 255, message = "food_name is required"))]
    pub food_name: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}
