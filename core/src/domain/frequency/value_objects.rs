use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RecordConsumptionInput {
    pub user_id: Uuid,
    pub food_name: String,
    pub eaten_at: DateTime<Utc>,
}
