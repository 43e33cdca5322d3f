use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::chat::{__path_chat, chat};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(chat))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new().route(&format!("{}/chat", state.args.server.root_path), post(chat))
}
