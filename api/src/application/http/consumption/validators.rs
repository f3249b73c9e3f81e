use chrono::{DateTime, Utc};
use morsel_core::domain::frequency::entities::ensure_not_in_future;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordConsumptionValidator {
    #[validate(length(min = 1, max = 255, message = "food_name is required"))]
    pub food_name: String,

    /// Defaults to the time the request is received. Must not be in the future.
    #[serde(default)]
    #[validate(custom(function = "eaten_at_not_in_future"))]
    pub eaten_at: Option<DateTime<Utc>>,
}

fn eaten_at_not_in_future(eaten_at: &DateTime<Utc>) -> Result<(), ValidationError> {
    ensure_not_in_future(*eaten_at, Utc::now()).map_err(|_| {
        ValidationError::new("eaten_at_in_future").with_message("eaten_at is in the future".into())
    })
}
