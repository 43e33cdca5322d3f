use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatValidator {
    #[validate(length(min = 1, max = 4000, message = "message must be 1 to 4000 characters"))]
    pub message: String,

    /// Current recipe, or profile and ingredients when no recipe is open
    #[serde(default)]
    pub context: serde_json::Value,
}
