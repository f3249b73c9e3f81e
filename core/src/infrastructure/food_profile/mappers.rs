use crate::{domain::food_profile::entities::FoodProfile, entity::food_profiles};

fn string_list(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

impl From<&food_profiles::Model> for FoodProfile {
    fn from(model: &food_profiles::Model) -> Self {
        Self {
            food_name: model.food_name.clone(),
            texture: model.texture.clone(),
            flavor_profile: model.flavor_profile.clone(),
            temperature: model.temperature.clone(),
            complexity: model.complexity,
            allergens: string_list(&model.allergens),
            dietary_tags: string_list(&model.dietary_tags),
        }
    }
}

impl From<food_profiles::Model> for FoodProfile {
    fn from(model: food_profiles::Model) -> Self {
        Self::from(&model)
    }
}
