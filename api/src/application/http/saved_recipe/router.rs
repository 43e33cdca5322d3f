use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    delete_saved_recipe::{__path_delete_saved_recipe, delete_saved_recipe},
    list_saved_recipes::{__path_list_saved_recipes, list_saved_recipes},
    save_recipe::{__path_save_recipe, save_recipe},
    toggle_saved_recipe::{__path_toggle_saved_recipe, toggle_saved_recipe},
};
use crate::application::{device_middleware::device_middleware, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(list_saved_recipes, save_recipe, toggle_saved_recipe, delete_saved_recipe))]
pub struct SavedRecipeApiDoc;

pub fn saved_recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/saved-recipes", root_path),
            get(list_saved_recipes).post(save_recipe),
        )
        .route(
            &format!("{}/saved-recipes/toggle", root_path),
            post(toggle_saved_recipe),
        )
        .route(
            &format!("{}/saved-recipes/{{title}}", root_path),
            delete(delete_saved_recipe),
        )
        .layer(middleware::from_fn(device_middleware))
}
