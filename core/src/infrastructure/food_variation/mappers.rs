use crate::{domain::food_variation::entities::FoodVariation, entity::food_variations};

impl From<food_variations::Model> for FoodVariation {
    fn from(model: food_variations::Model) -> Self {
        Self {
            id: model.id,
            base_food_name: model.base_food_name,
            variation_name: model.variation_name,
            variation_type: model.variation_type,
            description: model.description,
        }
    }
}
