use axum::{
    Extension,
    extract::{Path, State},
};
use morsel_core::domain::chain_suggestion::{
    entities::ChainSuggestion, ports::ChainSuggestionService, value_objects::RecordFeedbackInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::{
        chain_suggestion::validators::RecordFeedbackValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecordFeedbackResponse {
    pub data: ChainSuggestion,
}

#[utoipa::path(
    post,
    path = "/{suggestion_id}/feedback",
    tag = "chain-suggestion",
    summary = "Record feedback on a suggestion",
    params(
        ("suggestion_id" = Uuid, Path, description = "Suggestion id"),
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    request_body = RecordFeedbackValidator,
    responses(
        (status = 200, body = RecordFeedbackResponse),
        (status = 400, description = "Feedback already recorded"),
        (status = 404, description = "Not found")
    )
)]
pub async fn record_feedback(
    Path(suggestion_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<RecordFeedbackValidator>,
) -> Result<Response<RecordFeedbackResponse>, ApiError> {
    let suggestion = state
        .service
        .record_feedback(RecordFeedbackInput {
            suggestion_id,
            user_id: user.user_id,
            was_liked: payload.was_liked,
            feedback: payload.feedback,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecordFeedbackResponse { data: suggestion }))
}
