use crate::{domain::hyperfixation::entities::Hyperfixation, entity::hyperfixations};

impl From<&hyperfixations::Model> for Hyperfixation {
    fn from(model: &hyperfixations::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            food_name: model.food_name.clone(),
            started_at: model.started_at.to_utc(),
            ended_at: model.ended_at.map(|t| t.to_utc()),
            frequency_count: model.frequency_count,
            peak_frequency_per_day: model.peak_frequency_per_day,
            is_active: model.is_active,
            notes: model.notes.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<hyperfixations::Model> for Hyperfixation {
    fn from(model: hyperfixations::Model) -> Self {
        Self::from(&model)
    }
}
