use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SynthesizeSpeechValidator {
    #[validate(length(max = 2000, message = "text is too long"))]
    pub text: String,
}
