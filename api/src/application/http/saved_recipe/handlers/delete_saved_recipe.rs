use axum::{
    Extension,
    extract::{Path, State},
};
use forkframe_core::domain::saved_recipe::ports::SavedRecipeService;

use crate::application::{
    device_middleware::DeviceContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{title}",
    tag = "saved-recipe",
    summary = "Remove a saved recipe",
    description = "Removes the saved recipe whose title matches exactly.",
    responses(
        (status = 204, description = "Recipe removed"),
        (status = 404, description = "No saved recipe with this title")
    ),
    params(
        ("title" = String, Path, description = "Recipe title"),
        ("x-device-id" = Option<String>, Header, description = "Device identifier"),
    )
)]
pub async fn delete_saved_recipe(
    Path(title): Path<String>,
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .remove_saved_recipe(device.device_id, title)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
