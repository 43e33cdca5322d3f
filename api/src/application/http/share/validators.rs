use forkframe_core::domain::recipe::entities::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::saved_recipe::validators::validate_recipe;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareLinkValidator {
    #[validate(custom(function = "validate_recipe"))]
    pub recipe: Recipe,

    /// Page the link opens; defaults to the configured share base URL
    #[serde(default)]
    #[validate(url(message = "baseUrl must be an absolute URL"))]
    pub base_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResolveShareLinkValidator {
    /// Full URL, `#fragment` or bare fragment
    #[validate(length(max = 65536, message = "location is too long"))]
    pub location: String,
}
