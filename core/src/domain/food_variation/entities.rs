use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A small, curated tweak on a familiar food ("different dipping sauce",
/// "air-fried instead of baked").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodVariation {
    pub id: Uuid,
    pub base_food_name: String,
    pub variation_name: String,
    pub variation_type: String, // 'sauce' | 'preparation' | 'brand' | 'shape' | 'side'
    pub description: Option<String>,
}
