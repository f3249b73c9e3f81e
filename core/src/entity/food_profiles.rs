use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "food_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub food_name: String,
    pub texture: Option<String>,
    pub flavor_profile: Option<String>,
    pub temperature: Option<String>,
    pub complexity: Option<i16>,
    #[sea_orm(column_type = "JsonBinary")]
    pub allergens: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub dietary_tags: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
