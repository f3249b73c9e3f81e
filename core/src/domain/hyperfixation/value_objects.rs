use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RecordHyperfixationInput {
    pub user_id: Uuid,
    pub food_name: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EndHyperfixationInput {
    pub user_id: Uuid,
    pub hyperfixation_id: Uuid,
}
