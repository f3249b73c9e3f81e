use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct DismissInsightInput {
    pub insight_id: Uuid,
    pub user_id: Uuid,
}
