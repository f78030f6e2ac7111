use super::handlers::handle_voice_command::{__path_handle_voice_command, handle_voice_command};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(handle_voice_command))]
pub struct CookingApiDoc;

pub fn cooking_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/cooking/command", state.args.server.root_path),
        post(handle_voice_command),
    )
}
