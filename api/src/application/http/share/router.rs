use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    create_share_link::{__path_create_share_link, create_share_link},
    resolve_share_link::{__path_resolve_share_link, resolve_share_link},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_share_link, resolve_share_link))]
pub struct ShareApiDoc;

pub fn share_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/share-links", state.args.server.root_path),
            post(create_share_link),
        )
        .route(
            &format!("{}/share-links/resolve", state.args.server.root_path),
            post(resolve_share_link),
        )
}
