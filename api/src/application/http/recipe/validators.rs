use forkframe_core::domain::recipe::value_objects::{CookMood, UserProfile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeValidator {
    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<String>,

    pub profile: UserProfile,

    #[serde(default)]
    pub mood: CookMood,
}
