use axum::{Extension, extract::State};
use forkframe_core::domain::saved_recipe::{entities::SaveOutcome, ports::SavedRecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        saved_recipe::validators::SaveRecipeValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ToggleSavedRecipeResponse {
    pub outcome: SaveOutcome,
}

#[utoipa::path(
    post,
    path = "/toggle",
    tag = "saved-recipe",
    summary = "Toggle a saved recipe",
    description = "Removes the recipe when its title is already saved, saves it otherwise.",
    responses(
        (status = 200, body = ToggleSavedRecipeResponse),
        (status = 400, description = "Invalid recipe or device id")
    ),
    params(
        ("x-device-id" = Option<String>, Header, description = "Device identifier"),
    ),
    request_body = SaveRecipeValidator
)]
pub async fn toggle_saved_recipe(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<SaveRecipeValidator>,
) -> Result<Response<ToggleSavedRecipeResponse>, ApiError> {
    let outcome = state
        .service
        .toggle_saved_recipe(device.device_id, payload.recipe)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleSavedRecipeResponse { outcome }))
}
