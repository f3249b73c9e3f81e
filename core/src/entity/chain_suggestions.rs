use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chain_suggestions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub current_food_name: String,
    pub suggested_food_name: String,
    #[sea_orm(column_type = "Double")]
    pub similarity_score: f64,
    #[sea_orm(column_type = "Text")]
    pub reasoning: String,
    pub was_tried: bool,
    pub was_liked: Option<bool>,
    pub tried_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
