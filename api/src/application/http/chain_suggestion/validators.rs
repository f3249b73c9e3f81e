use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_count() -> u32 {
    5
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateSuggestionsValidator {
    #[validate(length(min = 1, max = 255, message = "food_name is required"))]
    pub food_name: String,

    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 10, message = "count must be between 1 and 10"))]
    pub count: u32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordFeedbackValidator {
    pub was_liked: bool,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestionHistoryQuery {
    pub food_name: Option<String>,
    pub limit: Option<u32>,
}
