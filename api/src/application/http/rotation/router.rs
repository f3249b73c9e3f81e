use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    create_rotation_schedule::{__path_create_rotation_schedule, create_rotation_schedule},
    delete_rotation_schedule::{__path_delete_rotation_schedule, delete_rotation_schedule},
    get_rotation_schedule::{__path_get_rotation_schedule, get_rotation_schedule},
    get_rotation_schedules::{__path_get_rotation_schedules, get_rotation_schedules},
    update_rotation_schedule::{__path_update_rotation_schedule, update_rotation_schedule},
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};

#[derive(OpenApi)]
#[openapi(paths(
    create_rotation_schedule,
    get_rotation_schedules,
    get_rotation_schedule,
    update_rotation_schedule,
    delete_rotation_schedule
))]
pub struct RotationApiDoc;

pub fn rotation_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/rotation-schedules", root_path),
            get(get_rotation_schedules).post(create_rotation_schedule),
        )
        .route(
            &format!("{}/rotation-schedules/{{schedule_id}}", root_path),
            get(get_rotation_schedule)
                .put(update_rotation_schedule)
                .delete(delete_rotation_schedule),
        )
        .layer(middleware::from_fn(user_middleware))
}
