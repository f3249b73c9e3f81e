use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sensory characteristics of a food, supplied by the catalog. Most foods
/// have no profile at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodProfile {
    pub food_name: String,
    pub texture: Option<String>, // e.g. "crunchy", "soft", "creamy"
    pub flavor_profile: Option<String>, // e.g. "salty", "sweet", "mild"
    pub temperature: Option<String>, // "hot" | "warm" | "cold" | "room"
    pub complexity: Option<i16>, // 1..=5
    pub allergens: Vec<String>,
    pub dietary_tags: Vec<String>,
}

#[cfg(test)]
impl FoodProfile {
    pub fn new(food_name: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            texture: None,
            flavor_profile: None,
            temperature: None,
            complexity: None,
            allergens: Vec::new(),
            dietary_tags: Vec::new(),
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor_profile = Some(flavor.into());
        self
    }
}
