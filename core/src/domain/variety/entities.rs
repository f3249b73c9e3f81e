use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::hyperfixation::entities::Hyperfixation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopFood {
    pub food_name: String,
    pub count: i64,
    /// Share of all consumption events in the 30-day window, 0..=100.
    pub percentage: f64,
}

/// Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VarietyReport {
    pub unique_7d: i64,
    pub unique_30d: i64,
    pub top_foods: Vec<TopFood>,
    pub active_hyperfixations: Vec<Hyperfixation>,
    pub suggested_messages: Vec<String>,
    pub variety_score: i32,
}
