use axum::extract::State;
use forkframe_core::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, ports::RecipeService, value_objects::GenerateRecipeInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

const GENERATION_FAILED_MESSAGE: &str = "AI chef is busy. Please try again.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Asks the generative model for one recipe built from the given ingredients, shaped by the cook's profile and mood.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, description = "No usable ingredients"),
        (status = 502, description = "The model failed or returned an unusable recipe")
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(GenerateRecipeInput {
            ingredients: payload.ingredients,
            profile: payload.profile,
            mood: payload.mood,
        })
        .await
        .map_err(|e| match e {
            CoreError::ExternalServiceError(_) => {
                ApiError::BadGateway(GENERATION_FAILED_MESSAGE.to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(GenerateRecipeResponse { data: recipe }))
}
