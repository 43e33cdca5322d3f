use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParseIngredientsValidator {
    /// Free text separated by commas, pipes or new lines
    #[validate(length(max = 4000, message = "text is too long"))]
    pub text: String,

    /// Ingredients already collected; new ones are appended after them
    #[serde(default)]
    pub existing: Vec<String>,
}

/// Multipart form accepted by the scan endpoint
#[derive(Debug, ToSchema)]
pub struct ScanIngredientsForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}
