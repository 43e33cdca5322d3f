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
pub struct SaveRecipeResponse {
    pub outcome: SaveOutcome,
}

#[utoipa::path(
    post,
    path = "",
    tag = "saved-recipe",
    summary = "Save a recipe",
    description = "Adds the recipe to the device's collection. Saving a title that is already stored changes nothing.",
    responses(
        (status = 201, body = SaveRecipeResponse, description = "Recipe saved"),
        (status = 200, body = SaveRecipeResponse, description = "A recipe with this title was already saved"),
        (status = 400, description = "Invalid recipe or device id")
    ),
    params(
        ("x-device-id" = Option<String>, Header, description = "Device identifier"),
    ),
    request_body = SaveRecipeValidator
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<SaveRecipeValidator>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let outcome = state
        .service
        .save_recipe(device.device_id, payload.recipe)
        .await
        .map_err(ApiError::from)?;

    let body = SaveRecipeResponse { outcome };
    Ok(match outcome {
        SaveOutcome::Saved => Response::Created(body),
        _ => Response::OK(body),
    })
}
