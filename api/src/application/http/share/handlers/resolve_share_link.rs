use forkframe_core::domain::{
    recipe::entities::Recipe,
    share::{DecodeFailure, recipe_from_fragment},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::application::http::{
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    share::validators::ResolveShareLinkValidator,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolveOutcome {
    Resolved,
    /// The location has no `recipe=` key
    Absent,
    Malformed,
    InvalidEncoding,
    InvalidStructure,
}

impl From<&DecodeFailure> for ResolveOutcome {
    fn from(failure: &DecodeFailure) -> Self {
        match failure {
            DecodeFailure::Malformed => ResolveOutcome::Malformed,
            DecodeFailure::InvalidEncoding => ResolveOutcome::InvalidEncoding,
            DecodeFailure::InvalidStructure(_) => ResolveOutcome::InvalidStructure,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ResolveShareLinkResponse {
    pub outcome: ResolveOutcome,
    pub recipe: Option<Recipe>,
}

#[utoipa::path(
    post,
    path = "/resolve",
    tag = "share",
    summary = "Resolve a share link",
    description = "Reads the recipe carried by a link. Unusable links are reported through `outcome`, never as an error status.",
    responses(
        (status = 200, body = ResolveShareLinkResponse)
    ),
    request_body = ResolveShareLinkValidator
)]
pub async fn resolve_share_link(
    ValidateJson(payload): ValidateJson<ResolveShareLinkValidator>,
) -> Result<Response<ResolveShareLinkResponse>, ApiError> {
    let response = match recipe_from_fragment(&payload.location) {
        None => ResolveShareLinkResponse {
            outcome: ResolveOutcome::Absent,
            recipe: None,
        },
        Some(Ok(recipe)) => ResolveShareLinkResponse {
            outcome: ResolveOutcome::Resolved,
            recipe: Some(recipe),
        },
        Some(Err(failure)) => {
            debug!(outcome = failure.kind(), "Share link did not resolve");
            ResolveShareLinkResponse {
                outcome: ResolveOutcome::from(&failure),
                recipe: None,
            }
        }
    };

    Ok(Response::OK(response))
}
