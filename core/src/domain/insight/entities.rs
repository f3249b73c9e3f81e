use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    VarietyCelebration,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::VarietyCelebration => "variety_celebration",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsightType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "variety_celebration" => Ok(InsightType::VarietyCelebration),
            other => Err(CoreError::validation(format!("unknown insight type: {other}"))),
        }
    }
}

/// One row per `(user, week_start_date, insight_type)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyInsight {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start_date: NaiveDate,
    pub insight_type: InsightType,
    pub message: String,
    pub is_dismissed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeeklyInsight {
    pub fn new(
        user_id: Uuid,
        week_start_date: NaiveDate,
        insight_type: InsightType,
        message: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            week_start_date,
            insight_type,
            message,
            is_dismissed: false,
            created_at: now,
            updated_at: now,
        }
    }
}
