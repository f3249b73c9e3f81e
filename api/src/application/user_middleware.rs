use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity stored in request extensions. The id is asserted by the
/// upstream gateway; this service does not authenticate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: Uuid,
}

pub async fn user_middleware(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(USER_ID_HEADER)
        .ok_or_else(|| ApiError::Unauthorized("missing X-User-Id header".to_string()))?;

    let user_id = header
        .to_str()
        .ok()
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .ok_or_else(|| ApiError::BadRequest("X-User-Id must be a UUID".to_string()))?;

    req.extensions_mut().insert(UserContext { user_id });

    Ok(next.run(req).await)
}
