use axum::{Extension, extract::State};
use forkframe_core::domain::{recipe::entities::Recipe, saved_recipe::ports::SavedRecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListSavedRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "saved-recipe",
    summary = "List saved recipes",
    description = "Returns the calling device's saved recipes in the order they were saved.",
    responses(
        (status = 200, body = ListSavedRecipesResponse),
        (status = 400, description = "Invalid device id")
    ),
    params(
        ("x-device-id" = Option<String>, Header, description = "Device identifier"),
    )
)]
pub async fn list_saved_recipes(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<ListSavedRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_saved_recipes(device.device_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListSavedRecipesResponse { data: recipes }))
}
