use crate::{domain::frequency::entities::FrequencySnapshot, entity::food_frequencies};

impl From<&food_frequencies::Model> for FrequencySnapshot {
    fn from(model: &food_frequencies::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            food_name: model.food_name.clone(),
            last_eaten_at: model.last_eaten_at.to_utc(),
            count_7d: model.count_7d,
            count_30d: model.count_30d,
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<food_frequencies::Model> for FrequencySnapshot {
    fn from(model: food_frequencies::Model) -> Self {
        Self::from(&model)
    }
}
