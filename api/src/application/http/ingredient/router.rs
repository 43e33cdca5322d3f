use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    parse_ingredients::{__path_parse_ingredients, parse_ingredients},
    scan_ingredients::{__path_scan_ingredients, MAX_IMAGE_SIZE, scan_ingredients},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(scan_ingredients, parse_ingredients))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients/scan", state.args.server.root_path),
            // Leave room for the multipart envelope around the image.
            post(scan_ingredients).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
        .route(
            &format!("{}/ingredients/parse", state.args.server.root_path),
            post(parse_ingredients),
        )
}
