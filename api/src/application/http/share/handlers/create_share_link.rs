use axum::extract::State;
use forkframe_core::domain::share::{SHARE_URL_SOFT_LIMIT, share_url};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    share::validators::CreateShareLinkValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareLinkResponse {
    pub url: String,
    pub length: usize,
    /// Set when the link is long enough that some apps may truncate it
    pub exceeds_soft_limit: bool,
}

#[utoipa::path(
    post,
    path = "",
    tag = "share",
    summary = "Create a share link",
    description = "Encodes the whole recipe into the fragment of a link, so opening it needs no server lookup.",
    responses(
        (status = 201, body = CreateShareLinkResponse),
        (status = 400, description = "Recipe cannot be encoded")
    ),
    request_body = CreateShareLinkValidator
)]
pub async fn create_share_link(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateShareLinkValidator>,
) -> Result<Response<CreateShareLinkResponse>, ApiError> {
    let base_url = payload
        .base_url
        .as_deref()
        .unwrap_or(&state.args.server.share_base_url);

    let url = share_url(base_url, &payload.recipe).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Response::Created(CreateShareLinkResponse {
        length: url.len(),
        exceeds_soft_limit: url.len() > SHARE_URL_SOFT_LIMIT,
        url,
    }))
}
