use sea_orm::ActiveValue::Set;

use crate::{
    domain::{common::entities::app_errors::CoreError, insight::entities::WeeklyInsight},
    entity::weekly_insights::{ActiveModel, Model},
};

impl TryFrom<Model> for WeeklyInsight {
    type Error = CoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            week_start_date: model.week_start_date,
            insight_type: model
                .insight_type
                .parse()
                .map_err(|_| CoreError::StoreUnavailable(format!("unknown insight type {}", model.insight_type)))?,
            message: model.message,
            is_dismissed: model.is_dismissed,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl From<&WeeklyInsight> for ActiveModel {
    fn from(insight: &WeeklyInsight) -> Self {
        Self {
            id: Set(insight.id),
            user_id: Set(insight.user_id),
            week_start_date: Set(insight.week_start_date),
            insight_type: Set(insight.insight_type.as_str().to_string()),
            message: Set(insight.message.clone()),
            is_dismissed: Set(insight.is_dismissed),
            created_at: Set(insight.created_at.fixed_offset()),
            updated_at: Set(insight.updated_at.fixed_offset()),
        }
    }
}
