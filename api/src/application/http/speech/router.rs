use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::synthesize_speech::{__path_synthesize_speech, synthesize_speech};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(synthesize_speech))]
pub struct SpeechApiDoc;

pub fn speech_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/speech", state.args.server.root_path),
        post(synthesize_speech),
    )
}
