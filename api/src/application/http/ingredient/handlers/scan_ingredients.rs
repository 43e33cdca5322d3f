use axum::extract::{Multipart, State};
use forkframe_core::domain::{
    common::entities::app_errors::CoreError,
    recipe::{ports::RecipeService, value_objects::ScanIngredientsInput},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

const SCAN_FAILED_MESSAGE: &str = "Image scan failed. Please add ingredients manually.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScanIngredientsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/scan",
    tag = "ingredient",
    summary = "Recognize ingredients in a photo",
    description = "Sends the uploaded image to the vision model and returns the ingredient names it recognized.",
    responses(
        (status = 200, body = ScanIngredientsResponse),
        (status = 400, description = "Missing or empty image"),
        (status = 413, description = "Image too large"),
        (status = 502, description = "Image scan failed")
    ),
    request_body(content_type = "multipart/form-data", content = crate::application::http::ingredient::validators::ScanIngredientsForm)
)]
pub async fn scan_ingredients(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ScanIngredientsResponse>, ApiError> {
    let mut image: Option<(bytes::Bytes, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field
            .content_type()
            .unwrap_or("image/jpeg")
            .to_string();
        if !mime_type.starts_with("image/") {
            return Err(ApiError::BadRequest(format!(
                "Unsupported content type: {}",
                mime_type
            )));
        }

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read image bytes: {}", e);
            ApiError::BadRequest(format!("Failed to read image: {}", e))
        })?;

        if data.is_empty() {
            warn!("Empty image upload attempted");
            return Err(ApiError::BadRequest("Image cannot be empty".to_string()));
        }
        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some((data, mime_type));
    }

    let (data, mime_type) = image
        .ok_or_else(|| ApiError::BadRequest("Missing 'image' field in multipart form".to_string()))?;

    let ingredients = state
        .service
        .scan_ingredients(ScanIngredientsInput {
            image_data: data.to_vec(),
            mime_type,
        })
        .await
        .map_err(|e| match e {
            CoreError::ExternalServiceError(_) => ApiError::BadGateway(SCAN_FAILED_MESSAGE.to_string()),
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(ScanIngredientsResponse { data: ingredients }))
}
