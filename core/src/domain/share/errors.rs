use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("recipe could not be encoded: {0}")]
pub struct EncodingError(pub String);

/// Why a shared link could not be turned back into a recipe.
///
/// Every variant is an expected outcome for foreign or tampered links and is
/// handled by falling back to the landing view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    #[error("share payload is not valid base64")]
    Malformed,

    #[error("share payload is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("share payload is not a recipe: {0}")]
    InvalidStructure(String),
}

impl DecodeFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeFailure::Malformed => "malformed",
            DecodeFailure::InvalidEncoding => "invalid_encoding",
            DecodeFailure::InvalidStructure(_) => "invalid_structure",
        }
    }
}
