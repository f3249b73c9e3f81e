use axum::{Extension, extract::State};
use chrono::Utc;
use morsel_core::domain::{
    frequency::{
        entities::{ConsumptionOutcome, FrequencySnapshot},
        ports::FrequencyService,
        value_objects::RecordConsumptionInput,
    },
    hyperfixation::entities::{Hyperfixation, HyperfixationTransition},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        consumption::validators::RecordConsumptionValidator,
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

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HyperfixationChange {
    Activated,
    Updated,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HyperfixationTransitionResponse {
    pub change: HyperfixationChange,
    pub hyperfixation: Hyperfixation,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecordConsumptionResponse {
    pub data: FrequencySnapshot,
    pub hyperfixation: Option<HyperfixationTransitionResponse>,
}

impl From<ConsumptionOutcome> for RecordConsumptionResponse {
    fn from(outcome: ConsumptionOutcome) -> Self {
        let hyperfixation = outcome.hyperfixation.map(|transition| match transition {
            HyperfixationTransition::Activated(hyperfixation) => HyperfixationTransitionResponse {
                change: HyperfixationChange::Activated,
                hyperfixation,
            },
            HyperfixationTransition::Updated(hyperfixation) => HyperfixationTransitionResponse {
                change: HyperfixationChange::Updated,
                hyperfixation,
            },
        });

        Self {
            data: outcome.snapshot,
            hyperfixation,
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "frequency",
    summary = "Record a consumption event",
    description = "Appends a food-eaten event, refreshes the 7 and 30 day counts for the food and reports any hyperfixation transition it caused.",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    request_body = RecordConsumptionValidator,
    responses(
        (status = 201, body = RecordConsumptionResponse),
        (status = 400, description = "Bad request"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn record_consumption(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<RecordConsumptionValidator>,
) -> Result<Response<RecordConsumptionResponse>, ApiError> {
    let outcome = state
        .service
        .record_consumption(RecordConsumptionInput {
            user_id: user.user_id,
            food_name: payload.food_name,
            eaten_at: payload.eaten_at.unwrap_or_else(Utc::now),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RecordConsumptionResponse::from(outcome)))
}
